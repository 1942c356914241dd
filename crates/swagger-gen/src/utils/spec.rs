use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::swagger::SwaggerDocument;

const SUPPORTED_VERSION: &str = "2.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

/// A memory-mapped Swagger document waiting to be parsed.
pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open {}", path.display()))?;

    Ok(Self {
      file,
      format: SpecFormat::from_path(path),
    })
  }

  pub fn parse(&self) -> anyhow::Result<SwaggerDocument> {
    parse_document(self.file.as_slice(), self.format)
  }
}

/// Parses a Swagger 2.0 document, reporting the JSON path of the first field
/// that fails to deserialize.
pub fn parse_document(bytes: &[u8], format: SpecFormat) -> anyhow::Result<SwaggerDocument> {
  let document: SwaggerDocument = match format {
    SpecFormat::Json => {
      let mut de = serde_json::Deserializer::from_slice(bytes);
      serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let path = err.path().to_string();
        anyhow::Error::new(err.into_inner()).context(format!("invalid Swagger document at '{path}'"))
      })?
    }
    SpecFormat::Yaml => {
      let de = serde_yaml::Deserializer::from_slice(bytes);
      serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        anyhow::Error::new(err.into_inner()).context(format!("invalid Swagger document at '{path}'"))
      })?
    }
  };

  anyhow::ensure!(
    document.swagger == SUPPORTED_VERSION,
    "unsupported swagger version '{}', expected '{SUPPORTED_VERSION}'",
    document.swagger
  );

  Ok(document)
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::{SpecFormat, SpecLoader, parse_document};

  const PETSTORE_JSON: &str = r##"{
    "swagger": "2.0",
    "info": { "title": "Petstore", "version": "1.0.0" },
    "paths": { "/pets": { "get": { "operationId": "listPets" } } },
    "definitions": {
      "Zebra": { "type": "string" },
      "Pet": { "type": "object", "properties": { "tag": { "$ref": "#/definitions/Zebra" } } }
    }
  }"##;

  const PETSTORE_YAML: &str = "
swagger: '2.0'
info:
  title: Petstore
  version: 1.0.0
paths: {}
definitions:
  Status:
    type: string
    enum: [available, sold]
";

  #[test]
  fn test_format_from_path() {
    assert_eq!(SpecFormat::from_path("api.yaml".as_ref()), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_path("api.yml".as_ref()), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_path("api.json".as_ref()), SpecFormat::Json);
    assert_eq!(SpecFormat::from_path("api".as_ref()), SpecFormat::Json);
  }

  #[test]
  fn test_parse_json_keeps_definition_order() {
    let document = parse_document(PETSTORE_JSON.as_bytes(), SpecFormat::Json).unwrap();
    let names: Vec<&str> = document.definitions.keys().map(String::as_str).collect();
    assert_eq!(names, ["Zebra", "Pet"]);
    assert_eq!(document.info.title, "Petstore");
  }

  #[test]
  fn test_parse_yaml() {
    let document = parse_document(PETSTORE_YAML.as_bytes(), SpecFormat::Yaml).unwrap();
    assert_eq!(document.info.version, "1.0.0");
    assert_eq!(document.definitions["Status"].enum_values.len(), 2);
  }

  #[test]
  fn test_error_names_failing_path() {
    let input = r#"{ "swagger": "2.0", "definitions": { "Pet": { "properties": 5 } } }"#;
    let error = parse_document(input.as_bytes(), SpecFormat::Json).unwrap_err();
    assert!(error.to_string().contains("definitions.Pet.properties"), "{error}");
  }

  #[test]
  fn test_rejects_other_versions() {
    let input = r#"{ "swagger": "3.0" }"#;
    let error = parse_document(input.as_bytes(), SpecFormat::Json).unwrap_err();
    assert!(error.to_string().contains("unsupported swagger version"));
  }

  #[tokio::test]
  async fn test_loader_reads_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(PETSTORE_JSON.as_bytes()).unwrap();
    file.flush().unwrap();

    let loader = SpecLoader::open(file.path()).await.unwrap();
    let document = loader.parse().unwrap();
    assert_eq!(document.operations().count(), 1);
  }
}
