//! Infrastructure implementation of the platform port traits.
//!
//! `OcClient<R>` routes all platform calls through the `oc` CLI via a
//! `CommandRunner`. Catalog, existence, create, and build operations map to
//! single `oc` invocations; no retry or backoff policy lives here.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{Catalog, ComponentBuilder, ComponentQuery, PathMode, ProjectSource};
use crate::infra::command_runner::{CommandRunner, TokioCommandRunner};

/// Namespace holding the shared builder-image catalog.
const CATALOG_NAMESPACE: &str = "openshift";

/// Infrastructure adapter that routes all platform calls through `oc`.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct OcClient<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> OcClient<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl OcClient<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner() -> Self {
        Self::new(TokioCommandRunner::default())
    }
}

/// Platform object name for a component: `<name>-<application>`.
fn object_name(name: &str, application: &str) -> String {
    format!("{name}-{application}")
}

impl<R: CommandRunner> Catalog for OcClient<R> {
    async fn type_exists(&self, component_type: &str) -> Result<bool> {
        let out = self
            .runner
            .run(
                "oc",
                &[
                    "get",
                    "imagestream",
                    component_type,
                    "-n",
                    CATALOG_NAMESPACE,
                    "-o",
                    "name",
                ],
            )
            .await
            .context("oc get imagestream")?;
        Ok(out.status.success())
    }
}

impl<R: CommandRunner> ComponentQuery for OcClient<R> {
    async fn component_exists(
        &self,
        name: &str,
        application: &str,
        project: &str,
    ) -> Result<bool> {
        let dc = format!("dc/{}", object_name(name, application));
        let out = self
            .runner
            .run("oc", &["get", &dc, "-n", project, "-o", "name"])
            .await
            .context("oc get deploymentconfig")?;
        Ok(out.status.success())
    }
}

impl<R: CommandRunner> ComponentBuilder for OcClient<R> {
    async fn create_from_git(
        &self,
        name: &str,
        component_type: &str,
        url: &str,
        application: &str,
    ) -> Result<()> {
        let source = format!("{component_type}~{url}");
        let obj = object_name(name, application);
        let name_flag = format!("--name={obj}");
        let labels = format!("--labels=app={application},component={name}");
        let out = self
            .runner
            .run("oc", &["new-app", &source, &name_flag, &labels])
            .await
            .context("oc new-app")?;
        anyhow::ensure!(
            out.status.success(),
            "Failed to create component from git source: {}",
            String::from_utf8_lossy(&out.stderr)
        );
        Ok(())
    }

    async fn create_from_path(
        &self,
        name: &str,
        component_type: &str,
        path: &Path,
        application: &str,
        mode: PathMode,
    ) -> Result<()> {
        let obj = object_name(name, application);
        let name_flag = format!("--name={obj}");
        let labels = format!("--labels=app={application},component={name}");
        let out = self
            .runner
            .run(
                "oc",
                &["new-build", component_type, &name_flag, "--binary=true", &labels],
            )
            .await
            .context("oc new-build")?;
        anyhow::ensure!(
            out.status.success(),
            "Failed to create component: {}",
            String::from_utf8_lossy(&out.stderr)
        );

        // The source path and mode are recorded on the build config so later
        // push/describe flows know where the content comes from.
        let bc = format!("bc/{obj}");
        let mode_ann = format!("loft.dev/source-mode={}", mode.as_str());
        let path_ann = format!("loft.dev/source-path={}", path.display());
        let annotate = self
            .runner
            .run("oc", &["annotate", &bc, &mode_ann, &path_ann, "--overwrite"])
            .await
            .context("oc annotate")?;
        anyhow::ensure!(
            annotate.status.success(),
            "Failed to annotate component source: {}",
            String::from_utf8_lossy(&annotate.stderr)
        );
        Ok(())
    }

    async fn build(&self, name: &str, application: &str, follow: bool, wait: bool) -> Result<()> {
        let bc = object_name(name, application);
        let mut args = vec!["start-build", bc.as_str()];
        if follow {
            args.push("--follow");
        }
        if wait {
            args.push("--wait");
        }

        if follow {
            // Followed builds stream logs straight to the terminal and have
            // no sensible timeout.
            let status = self
                .runner
                .run_status("oc", &args)
                .await
                .context("oc start-build")?;
            anyhow::ensure!(status.success(), "Build failed");
        } else {
            let out = self
                .runner
                .run("oc", &args)
                .await
                .context("oc start-build")?;
            anyhow::ensure!(
                out.status.success(),
                "Failed to start build: {}",
                String::from_utf8_lossy(&out.stderr)
            );
        }
        Ok(())
    }
}

impl<R: CommandRunner> ProjectSource for OcClient<R> {
    async fn current_project(&self) -> Result<String> {
        let out = self
            .runner
            .run("oc", &["project", "-q"])
            .await
            .context("oc project")?;
        anyhow::ensure!(
            out.status.success(),
            "Failed to determine the current project: {}",
            String::from_utf8_lossy(&out.stderr)
        );
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }
}
