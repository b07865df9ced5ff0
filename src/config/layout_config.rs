use std::path::Path;

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::{ext::BestEffortPathExt, filesystem::TreeNode};

/// A project skeleton loaded from a YAML layout file.
///
/// The top-level mapping is the root directory. Nested mappings are
/// folders, sequences are the files created inside the folder named by
/// their key, and the empty key places files directly in the parent:
///
/// ```yaml
/// src:
///   components:
///     Layout: [Header.jsx, Layout.jsx]
///   "": [App.jsx]
/// ```
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    tree: TreeNode,
}

impl LayoutConfig {
    pub async fn read(path: &Path) -> Result<Self, LayoutConfigError> {
        debug!("Reading layout file: {}", path.best_effort_path_display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        debug!("Successfully read layout file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        contents.as_str().try_into()
    }

    pub fn into_tree(self) -> TreeNode {
        self.tree
    }

    fn parse_directory(
        mapping: &LinkedHashMap<Yaml, Yaml>,
        location: &str,
    ) -> Result<TreeNode, LayoutConfigError> {
        let children = mapping
            .iter()
            .map(|(key, value)| {
                let Yaml::Value(Scalar::String(name)) = key else {
                    return NonStringNameSnafu {
                        location: location.to_string(),
                    }
                    .fail();
                };
                let entry = join_location(location, name);
                Ok((name.to_string(), Self::parse_entry(value, &entry)?))
            })
            .collect::<Result<LinkedHashMap<_, _>, _>>()?;

        Ok(TreeNode::Directory(children))
    }

    fn parse_entry(value: &Yaml, entry: &str) -> Result<TreeNode, LayoutConfigError> {
        match value {
            Yaml::Mapping(mapping) => Self::parse_directory(mapping, entry),
            Yaml::Sequence(items) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .context(NonStringFileNameSnafu { entry })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(TreeNode::Files),
            Yaml::Value(Scalar::Null) => {
                debug!("Entry '{entry}' is empty, treating it as a folder without files");
                Ok(TreeNode::Files(Vec::new()))
            }
            _ => InvalidEntrySnafu { entry }.fail(),
        }
    }
}

fn join_location(location: &str, name: &str) -> String {
    if location.is_empty() {
        name.to_string()
    } else {
        format!("{location}/{name}")
    }
}

impl TryFrom<&str> for LayoutConfig {
    type Error = LayoutConfigError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents
            .first()
            .ok_or(LayoutConfigError::MalformedLayout)?;

        let top_level = document
            .as_mapping()
            .ok_or(LayoutConfigError::TopLevelNotMap)?;

        let tree = Self::parse_directory(top_level, "")?;
        Ok(LayoutConfig { tree })
    }
}

#[derive(Debug, Snafu)]
pub enum LayoutConfigError {
    #[snafu(display("Failed to read the layout file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("The layout file is not valid UTF-8: {}", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the layout file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted layout file"))]
    MalformedLayout,
    #[snafu(display("Top level of the layout should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Folder names under '{}' must be strings", location))]
    NonStringName { location: String },
    #[snafu(display(
        "Entry '{}' should be a map of folders or a list of file names",
        entry
    ))]
    InvalidEntry { entry: String },
    #[snafu(display("File names listed under '{}' must be strings", entry))]
    NonStringFileName { entry: String },
}
