//! Object-URL previews for selected crop images.
//!
//! `URL.createObjectURL` leaks until revoked, so the URL lives inside a
//! guard that revokes on drop. Replacing a selection drops the old guard;
//! page teardown drops the last one.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use std::rc::Rc;

/// Owned object URL, revoked when dropped.
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    #[cfg(feature = "hydrate")]
    fn for_file(file: &web_sys::File) -> Option<Self> {
        let url = web_sys::Url::create_object_url_with_blob(file).ok()?;
        Some(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = web_sys::Url::revoke_object_url(&self.url);
        }
    }
}

/// An image picked from the file input or pasted from the clipboard,
/// carrying its preview URL.
#[derive(Clone)]
pub struct SelectedImage {
    name: String,
    #[cfg(feature = "hydrate")]
    file: web_sys::File,
    preview: Rc<ObjectUrl>,
}

impl SelectedImage {
    /// Returns `None` when the browser refuses to mint a preview URL.
    #[cfg(feature = "hydrate")]
    pub fn from_file(file: web_sys::File) -> Option<Self> {
        let preview = ObjectUrl::for_file(&file)?;
        Some(Self {
            name: file.name(),
            file,
            preview: Rc::new(preview),
        })
    }

    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// URL for the preview `<img>`.
    pub fn preview_url(&self) -> String {
        self.preview.as_str().to_owned()
    }

    #[cfg(feature = "hydrate")]
    pub fn file(&self) -> &web_sys::File {
        &self.file
    }
}
