/// Portrait download for loaded people
///
/// The roster only carries picture URLs; the gallery needs the encoded
/// image bytes to build an image handle. Each portrait is fetched on its
/// own, and a failure only leaves that one card without a picture.

use super::loader::check_status;
use super::LoadError;

/// Download one portrait and return its encoded bytes (JPEG from the API)
pub async fn fetch_portrait(client: reqwest::Client, url: String) -> Result<Vec<u8>, LoadError> {
    if url.trim().is_empty() {
        return Err(LoadError::Url("empty picture URL".to_string()));
    }

    let url = reqwest::Url::parse(&url).map_err(|e| LoadError::Url(e.to_string()))?;

    let response = client.get(url).send().await?;
    check_status(response.status())?;

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}
