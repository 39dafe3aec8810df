fn main() -> anyhow::Result<()> {
    anime_eda::run()
}
