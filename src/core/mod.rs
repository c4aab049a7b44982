// ─── mcmeta Core ───
// Version metadata resolution with local artifact overrides.
//
// Architecture:
//   core/
//     version/    — Version descriptor + download references + manifests
//     provider/   — Remote provider, local override provider, dispatcher
//     downloader/ — SHA-1 validated downloads into the user cache
//     config      — Provider options (JSON)
//     paths       — User cache layout

pub mod config;
pub mod downloader;
pub mod error;
pub mod http;
pub mod paths;
pub mod provider;
pub mod version;
