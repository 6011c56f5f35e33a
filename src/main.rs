use log_analyzer::app;

fn main() -> anyhow::Result<()> {
    app::main()
}
