use miette::Result;

/// Main entry point for the pom-graph CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    pom_graph::run()
}
