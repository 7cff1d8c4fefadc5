/// Fields pulled out of a multipart upload.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub archive: Option<Vec<u8>>,
    pub description: Option<String>,
}
