// Versions command for listing what a vendor catalog offers

use crate::distributions::REGISTRY;
use crate::distributions::platform;
use crate::ui;
use log::debug;

pub async fn versions(
    arch: String,
    package_type: String,
    distribution: String,
    ea: bool,
) -> anyhow::Result<()> {
    let provider = REGISTRY.get_or_error(&distribution)?;
    debug!(
        "listing {} versions ({}/{}, {})",
        distribution,
        arch,
        package_type,
        platform::release_status(ea)
    );

    let pb = ui::spinner(&format!("Fetching {} catalog", distribution));
    let versions = match provider.list_versions(&arch, &package_type, ea).await {
        Ok(versions) => {
            pb.finish_and_clear();
            versions
        }
        Err(err) => {
            pb.finish_and_clear();
            return Err(err.into());
        }
    };

    ui::header(&format!(
        "Available {} versions ({}, {})",
        distribution,
        package_type,
        platform::release_status(ea)
    ));
    for version in versions {
        ui::plain(&version);
    }

    Ok(())
}
