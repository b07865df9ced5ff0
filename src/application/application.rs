use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::config::{LayoutConfig, LayoutConfigError, default_layout};
use crate::ext::BestEffortPathExt;
use crate::filesystem::TreeNode;
use crate::materializer::{FilesystemError, StdoutReporter, materialize};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let tree = Self::load_tree(&app_config).await?;
        debug!("Loaded layout: {:?}", tree);

        let mut reporter = StdoutReporter::new();
        if app_config.dry_run {
            info!("Dry run, nothing will be written");
            reporter.print_plan(&tree.plan(&app_config.root));
            return Ok(());
        }

        let summary = materialize(&app_config.root, &tree, &mut reporter)
            .await
            .context(MaterializeSnafu)?;
        info!(
            "Created {} under {}",
            summary,
            app_config.root.best_effort_path_display()
        );

        println!("\nProject structure created successfully!");
        Ok(())
    }

    async fn load_tree(app_config: &RuntimeConfig) -> Result<TreeNode, ApplicationError> {
        match &app_config.layout {
            Some(path) => {
                let layout = LayoutConfig::read(path).await.context(LayoutSnafu)?;
                Ok(layout.into_tree())
            }
            None => {
                debug!("No layout file given, using the built-in layout");
                Ok(default_layout())
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the layout"))]
    LayoutError { source: LayoutConfigError },
    #[snafu(display("Critical failure encountered while creating the project structure"))]
    MaterializeError { source: FilesystemError },
}
