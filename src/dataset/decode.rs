use crate::dataset::error::DatasetError;
use crate::types::row::Row;
use async_compression::tokio::bufread::GzipDecoder;
use tokio::io::{AsyncReadExt, BufReader};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Turns a fetched table body into rows.
///
/// The combined table is published gzip-compressed under a plain `.json` name,
/// so the payload is sniffed rather than trusted by extension.
pub(crate) async fn decode_rows(resource: &str, body: Vec<u8>) -> Result<Vec<Row>, DatasetError> {
    let json = if body.starts_with(&GZIP_MAGIC) {
        let mut decoder = GzipDecoder::new(BufReader::new(body.as_slice()));
        let mut decompressed = Vec::with_capacity(body.len() * 8);
        decoder
            .read_to_end(&mut decompressed)
            .await
            .map_err(|e| DatasetError::Decompress(resource.to_string(), e))?;
        decompressed
    } else {
        body
    };

    let resource_owned = resource.to_string();
    tokio::task::spawn_blocking(move || {
        serde_json::from_slice::<Vec<Row>>(&json).map_err(|source| DatasetError::Parse {
            resource: resource_owned,
            source,
        })
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_compression::tokio::write::GzipEncoder;
    use tokio::io::AsyncWriteExt;

    const TABLE: &str = r#"[
        {"file":"aoml/13857/profiles/R13857_001.nc","YYYYMMDD":19970729,"lat_round":0,"lon_round":344},
        {"file":"aoml/13857/profiles/R13857_002.nc","YYYYMMDD":19970808,"lat_round":1,"lon_round":343}
    ]"#;

    #[tokio::test]
    async fn test_decode_plain_json() {
        let rows = decode_rows("1997.json", TABLE.as_bytes().to_vec())
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].yyyymmdd, 19970808);
    }

    #[tokio::test]
    async fn test_decode_gzip_payload() {
        let mut encoder = GzipEncoder::new(Vec::new());
        encoder.write_all(TABLE.as_bytes()).await.unwrap();
        encoder.shutdown().await.unwrap();
        let compressed = encoder.into_inner();
        assert!(compressed.starts_with(&GZIP_MAGIC));

        let rows = decode_rows("search_table.json", compressed).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].file, "aoml/13857/profiles/R13857_001.nc");
    }

    #[tokio::test]
    async fn test_decode_rejects_malformed_body() {
        let err = decode_rows("2024.json", b"<html>404</html>".to_vec())
            .await
            .unwrap_err();
        assert!(err.is_parse_error());
        assert!(matches!(err, DatasetError::Parse { ref resource, .. } if resource == "2024.json"));
    }

    #[tokio::test]
    async fn test_decode_rejects_wrong_shape() {
        let err = decode_rows("2024.json", br#"{"file":"x.nc"}"#.to_vec())
            .await
            .unwrap_err();
        assert!(err.is_parse_error());
    }
}
