use order_generator::cli::{init_tracing, run_cli};

fn main() -> anyhow::Result<()> {
    init_tracing();
    run_cli()
}
