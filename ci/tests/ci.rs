use gh_workflow::*;

#[test]
fn main() {
    // Build and Test job
    let build_job = Job::new("Build and Test")
        .name("Build and Test")
        .runs_on("ubuntu-latest")
        .permissions(Permissions::default().contents(Level::Read))
        .add_step(Step::new("Checkout Code").uses("actions", "checkout", "v4"))
        .add_step(
            Step::new("Setup Rust Toolchain")
                .uses("actions-rust-lang", "setup-rust-toolchain", "v1")
                .with(Input::default().add("toolchain", "stable").add("cache", "true")),
        )
        .add_step(Step::new("Cargo Test").run("cargo test --all-features --workspace"));

    // Lint job
    let lint_job = Job::new("Lint")
        .name("Lint")
        .runs_on("ubuntu-latest")
        .permissions(Permissions::default().contents(Level::Read))
        .add_step(Step::new("Checkout Code").uses("actions", "checkout", "v4"))
        .add_step(
            Step::new("Setup Rust Toolchain")
                .uses("actions-rust-lang", "setup-rust-toolchain", "v1")
                .with(
                    Input::default()
                        .add("toolchain", "stable")
                        .add("components", "clippy, rustfmt"),
                ),
        )
        .add_step(Step::new("Cargo Fmt").run("cargo fmt --all --check"))
        .add_step(
            Step::new("Cargo Clippy")
                .run("cargo clippy --all-features --workspace -- -D warnings"),
        );

    let workflow = Workflow::new("ci")
        .name("ci")
        .env(Env::from(("RUSTFLAGS", "-Dwarnings")))
        .on(Event::default()
            .pull_request(
                PullRequest::default()
                    .add_branch("main")
                    .add_type(PullRequestType::Opened)
                    .add_type(PullRequestType::Synchronize)
                    .add_type(PullRequestType::Reopened),
            )
            .push(Push::default().add_branch("main")))
        .add_job("build", build_job)
        .add_job("lint", lint_job);

    workflow.generate().unwrap();
}
