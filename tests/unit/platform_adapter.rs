//! Tests for the `oc`-backed platform adapter — verifies argument
//! composition and exit-status interpretation through a scripted runner.

#![allow(clippy::expect_used)]

use std::process::Output;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use loft_cli::application::ports::{
    Catalog, ComponentBuilder, ComponentQuery, PathMode, ProjectSource,
};
use loft_cli::infra::command_runner::CommandRunner;
use loft_cli::infra::platform::OcClient;

use crate::helpers::{err_output, ok_output};

/// Returns a canned output per invocation, recording every call.
///
/// The `CommandRunner` impl is on `&ScriptedRunner` so tests can hand a
/// reference to `OcClient` and still inspect the recorded calls afterwards.
struct ScriptedRunner {
    responses: Mutex<Vec<Output>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedRunner {
    fn new(responses: Vec<Output>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().expect("lock").clone()
    }

    fn record_and_respond(&self, program: &str, args: &[&str]) -> Output {
        self.calls.lock().expect("lock").push((
            program.to_string(),
            args.iter().map(ToString::to_string).collect(),
        ));
        let mut responses = self.responses.lock().expect("lock");
        assert!(
            !responses.is_empty(),
            "runner invoked more times than scripted"
        );
        responses.remove(0)
    }
}

impl CommandRunner for &ScriptedRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        Ok(self.record_and_respond(program, args))
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        _: Duration,
    ) -> Result<Output> {
        Ok(self.record_and_respond(program, args))
    }

    async fn run_status(&self, program: &str, args: &[&str]) -> Result<std::process::ExitStatus> {
        Ok(self.record_and_respond(program, args).status)
    }
}

#[tokio::test]
async fn type_exists_queries_the_shared_catalog_namespace() {
    let runner = ScriptedRunner::new(vec![ok_output(b"imagestream/nodejs")]);
    let client = OcClient::new(&runner);

    assert!(client.type_exists("nodejs").await.expect("query"));

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "oc");
    assert!(calls[0].1.contains(&"imagestream".to_string()));
    assert!(calls[0].1.contains(&"nodejs".to_string()));
    assert!(calls[0].1.contains(&"openshift".to_string()));
}

#[tokio::test]
async fn type_absent_when_oc_reports_failure() {
    let runner = ScriptedRunner::new(vec![err_output(b"not found")]);
    let client = OcClient::new(&runner);
    assert!(!client.type_exists("cobol").await.expect("query"));
}

#[tokio::test]
async fn component_exists_targets_the_scoped_object_name() {
    let runner = ScriptedRunner::new(vec![ok_output(b"deploymentconfig/frontend-app")]);
    let client = OcClient::new(&runner);

    assert!(
        client
            .component_exists("frontend", "app", "myproject")
            .await
            .expect("query")
    );

    let calls = runner.calls();
    assert!(calls[0].1.contains(&"dc/frontend-app".to_string()));
    assert!(calls[0].1.contains(&"myproject".to_string()));
}

#[tokio::test]
async fn create_from_git_surfaces_stderr_on_failure() {
    let runner = ScriptedRunner::new(vec![err_output(b"image stream missing")]);
    let client = OcClient::new(&runner);

    let err = client
        .create_from_git("frontend", "nodejs", "https://example/repo.git", "app")
        .await
        .expect_err("create should fail");
    assert!(
        err.to_string().contains("image stream missing"),
        "got: {err:#}"
    );
}

#[tokio::test]
async fn create_from_git_combines_type_and_url() {
    let runner = ScriptedRunner::new(vec![ok_output(b"")]);
    let client = OcClient::new(&runner);

    client
        .create_from_git("frontend", "nodejs", "https://example/repo.git", "app")
        .await
        .expect("create should succeed");

    let calls = runner.calls();
    assert!(
        calls[0]
            .1
            .contains(&"nodejs~https://example/repo.git".to_string()),
        "got: {:?}",
        calls[0].1
    );
}

#[tokio::test]
async fn create_from_path_records_mode_annotation() {
    let runner = ScriptedRunner::new(vec![ok_output(b""), ok_output(b"")]);
    let client = OcClient::new(&runner);

    client
        .create_from_path(
            "backend",
            "wildfly",
            std::path::Path::new("/work/sample.war"),
            "app",
            PathMode::Binary,
        )
        .await
        .expect("create should succeed");

    let calls = runner.calls();
    assert_eq!(calls.len(), 2, "expected new-build followed by annotate");
    assert!(calls[1].1.iter().any(|a| a.contains("source-mode=binary")));
    assert!(
        calls[1]
            .1
            .iter()
            .any(|a| a.contains("source-path=/work/sample.war"))
    );
}

#[tokio::test]
async fn non_followed_build_failure_includes_stderr() {
    let runner = ScriptedRunner::new(vec![err_output(b"no build config")]);
    let client = OcClient::new(&runner);

    let err = client
        .build("frontend", "app", false, false)
        .await
        .expect_err("build should fail");
    assert!(err.to_string().contains("no build config"), "got: {err:#}");
}

#[tokio::test]
async fn followed_build_passes_follow_and_wait_flags() {
    let runner = ScriptedRunner::new(vec![ok_output(b"")]);
    let client = OcClient::new(&runner);

    client
        .build("frontend", "app", true, true)
        .await
        .expect("build should succeed");

    let calls = runner.calls();
    assert!(calls[0].1.contains(&"--follow".to_string()));
    assert!(calls[0].1.contains(&"--wait".to_string()));
    assert!(calls[0].1.contains(&"frontend-app".to_string()));
}

#[tokio::test]
async fn current_project_trims_stdout() {
    let runner = ScriptedRunner::new(vec![ok_output(b"myproject\n")]);
    let client = OcClient::new(&runner);
    assert_eq!(client.current_project().await.expect("query"), "myproject");
}
