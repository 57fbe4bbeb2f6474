use super::*;

#[test]
fn login_input_requires_both_fields() {
    let expected = Err("Enter both username and password.");
    assert_eq!(validate_login_input("", "pw"), expected);
    assert_eq!(validate_login_input("ravi", ""), expected);
    assert_eq!(validate_login_input("   ", "pw"), expected);
}

#[test]
fn username_is_trimmed_password_kept_verbatim() {
    let credentials = validate_login_input(" ravi ", " pw ").unwrap();
    assert_eq!(credentials.username, "ravi");
    assert_eq!(credentials.password, " pw ");
}

#[test]
fn alert_falls_back_when_the_error_is_blank() {
    assert_eq!(login_alert_message(""), "Invalid login credentials");
    assert_eq!(login_alert_message("Invalid credentials"), "Invalid credentials");
    assert_eq!(login_alert_message("Session not created"), "Session not created");
}
