fn main() -> anyhow::Result<()> {
    benchtable::run()
}
