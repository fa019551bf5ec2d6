use base64::{engine::general_purpose::STANDARD, Engine as _};
use glamgen::logger::{self, LogLevel, LoggerConfig};
use glamgen::models::catalog;
use glamgen::{EditRequest, StudioClient, StudioConfig, StudioError};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let level = env::var("STUDIO_LOG_LEVEL")
        .ok()
        .and_then(|v| LogLevel::parse(&v))
        .unwrap_or(LogLevel::Info);
    logger::init_with_config(LoggerConfig::development().with_level(level))?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = StudioConfig::from_env();
    logger::log_config_info(&config);

    log::info!("🎨 Available studio modules:");
    for module in catalog::modules() {
        let controls: Vec<&str> = module.controls.iter().map(|c| c.label).collect();
        log::info!(
            "  {} {} ({}) - {}",
            module.icon,
            module.label,
            module.category,
            controls.join(", ")
        );
    }

    let photo_path = match env::args().nth(1).or_else(|| env::var("STUDIO_PHOTO").ok()) {
        Some(path) => path,
        None => {
            log::error!("❌ No photo given. Usage: glamgen <photo> (or set STUDIO_PHOTO)");
            return Err("missing photo path".into());
        }
    };
    let module_id = env::var("STUDIO_CATEGORY").unwrap_or_else(|_| "makeup".to_string());
    let output_path = env::var("STUDIO_OUTPUT").unwrap_or_else(|_| {
        format!(
            "glamgen_{}_{}.jpg",
            module_id,
            chrono::Utc::now().timestamp()
        )
    });

    let mut options = catalog::starting_options();
    for name in ["style", "intensity", "color"] {
        if let Ok(value) = env::var(format!("STUDIO_{}", name.to_ascii_uppercase())) {
            options.insert(name, value);
        }
    }

    let photo = fs::read(&photo_path)?;
    log::info!("📷 Loaded {} ({} bytes)", photo_path, photo.len());

    let request = EditRequest::from_module_id(STANDARD.encode(&photo), &module_id, options);

    if let Some(module) = request.category().and_then(catalog::module_for) {
        let rejected = module.rejected_options(request.options());
        if !rejected.is_empty() {
            log::warn!(
                "⚠️  {} does not offer the chosen value for: {}",
                module.label,
                rejected.join(", ")
            );
        }
    }

    let client = StudioClient::new(config)?;

    log::info!("🔄 Generating {} edit...", request.module_id());
    match client.generate_edit(&request).await {
        Ok(result) => {
            let bytes = result.decode()?;
            fs::write(&output_path, bytes)?;
            log::info!("💾 Edited image saved to: {}", output_path);
            if let Some(note) = &result.note {
                log::info!("💡 {}", note);
            }
            Ok(())
        }
        Err(e) => {
            log::error!("❌ Edit failed: {}", e);
            match &e {
                StudioError::Configuration(_) => {
                    log::warn!("💡 Set GEMINI_API_KEY in your environment or .env file")
                }
                err if err.is_retryable() => log::warn!("💡 This can be retried"),
                _ => {}
            }
            Err(e.into())
        }
    }
}
