pub mod clipboard;
pub mod notifications;
pub mod opener;
pub mod paths;
pub mod reachability;
pub mod system_info;

pub use clipboard::Clipboard;
pub use notifications::notify;
pub use opener::open_external;
pub use paths::{config_dir, data_dir, ensure_dirs, window_frame_file};
pub use reachability::{ConnectivityTracker, ReachabilityMonitor};
pub use system_info::os_version;
