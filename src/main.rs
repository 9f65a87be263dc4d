fn main() -> anyhow::Result<()> {
    pixnote::run()?;
    Ok(())
}
