use anyhow::Result;

fn main() -> Result<()> {
    bzlmirror::cli::run()
}
