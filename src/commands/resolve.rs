// Resolve command for picking a single bundle out of a vendor catalog

use crate::distributions::{JdkRequest, REGISTRY};
use crate::ui;
use log::debug;

pub async fn resolve(
    version: String,
    arch: String,
    package_type: String,
    distribution: String,
    json: bool,
) -> anyhow::Result<()> {
    let provider = REGISTRY.get_or_error(&distribution)?;
    let request = JdkRequest {
        version,
        architecture: arch,
        package_type,
    };
    debug!(
        "resolving '{}' ({}/{}) via {}",
        request.version, request.architecture, request.package_type, distribution
    );

    let pb = ui::spinner(&format!("Resolving {} {}", distribution, request.version));
    let resolved = match provider.resolve(&request).await {
        Ok(resolved) => {
            ui::finish_spinner_resolved(&pb, &distribution, &resolved.version);
            resolved
        }
        Err(err) => {
            pb.finish_and_clear();
            return Err(err.into());
        }
    };

    if json {
        ui::plain(&serde_json::to_string_pretty(&resolved)?);
    } else {
        ui::dim(&resolved.url);
    }

    Ok(())
}
