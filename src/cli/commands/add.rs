//! cli::commands::add
//!
//! Mirror one module version into the registry.

use anyhow::Result;

use crate::core::repo_name::module_path_to_repo_name;
use crate::registry::goproxy::GoProxy;
use crate::registry::store::RegistryStore;
use crate::registry::sync::sync_module;

use super::Context;

/// Handle `bzlmirror add <module-path> <version>`.
pub fn add(ctx: &Context, module_path: &str, version: &str) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(add_async(ctx, module_path, version))
}

async fn add_async(ctx: &Context, module_path: &str, version: &str) -> Result<()> {
    let proxy = GoProxy::new(&ctx.config.proxy);
    let store = RegistryStore::new(&ctx.config.registry);

    let source = sync_module(&proxy, &store, module_path, version).await?;

    if !ctx.quiet {
        let module_name = module_path_to_repo_name(module_path);
        println!("{module_path} {version} -> modules/{module_name}/{version}");
        println!("  integrity: {}", source.integrity);
        println!("  url:       {}", source.url);
    }
    Ok(())
}
