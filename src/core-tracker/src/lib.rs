pub mod common;

pub use common::cors_config::{DEFAULT_ALLOWED_ORIGINS, allowed_origins, cors_layer, parse_origins};
pub use common::db_env::{DbEnvError, get_database_url, get_db_pool};
pub use common::health::health_check;
pub use common::hostname::{HostPortError, get_api_base_url};
pub use common::logging::setup_logging;
pub use common::tls_config::{TlsConfigError, get_tls_config, is_tls_enabled};
