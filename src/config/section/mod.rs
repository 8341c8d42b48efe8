//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pwa.toml`:
//!
//! | Module     | TOML Section   | Purpose                                   |
//! |------------|----------------|-------------------------------------------|
//! | `app`      | `[app]`        | Display name, short name, description     |
//! | `build`    | `[build]`      | Output directory and emitted file names   |
//! | `deploy`   | `[deploy]`     | Deployment target (base path or URL)      |
//! | `manifest` | `[manifest]`   | Colors, display mode, update strategy, icons |

mod app;
mod build;
mod deploy;
mod manifest;

pub use app::AppConfig;
pub use build::BuildConfig;
pub use deploy::DeployConfig;
pub use manifest::ManifestConfig;
