fn main() -> anyhow::Result<()> {
    recordworks_observability::init();
    recordworks_cli::run()
}
