//! cli::commands::versions
//!
//! Query the module proxy's version list.

use anyhow::Result;

use crate::registry::goproxy::GoProxy;
use crate::registry::ModuleProxy;

use super::Context;

/// Handle `bzlmirror versions <module-path>`.
pub fn versions(ctx: &Context, module_path: &str) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(versions_async(ctx, module_path))
}

async fn versions_async(ctx: &Context, module_path: &str) -> Result<()> {
    let proxy = GoProxy::new(&ctx.config.proxy);
    let versions = proxy.list_versions(module_path).await?;

    if versions.is_empty() && !ctx.quiet {
        eprintln!("no versions known for {module_path}");
        return Ok(());
    }
    for version in versions {
        println!("{version}");
    }
    Ok(())
}
