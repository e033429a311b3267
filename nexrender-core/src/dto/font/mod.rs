//! Font DTOs

/// Filename used for the multipart `font` part when none is known
pub const DEFAULT_FONT_FILE_NAME: &str = "font.ttf";

/// Content type used for the multipart `font` part when none is known
pub const DEFAULT_FONT_CONTENT_TYPE: &str = "application/octet-stream";

/// A font file ready to be uploaded as `multipart/form-data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
    /// Optional `familyName` form field
    pub family_name: Option<String>,
}

impl FontUpload {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            file_name: DEFAULT_FONT_FILE_NAME.to_string(),
            content_type: DEFAULT_FONT_CONTENT_TYPE.to_string(),
            family_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the family name; an empty name leaves the field out
    pub fn with_family_name(mut self, family_name: impl Into<String>) -> Self {
        let family_name = family_name.into();
        self.family_name = (!family_name.is_empty()).then_some(family_name);
        self
    }
}
