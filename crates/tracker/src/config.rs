/// Map center used when there is nothing to plot (central Nepal trekking region).
pub const DEFAULT_MAP_LATITUDE: f64 = 28.2;
pub const DEFAULT_MAP_LONGITUDE: f64 = 84.5;

/// Zoom level of the regional overview shown with no markers.
pub const DEFAULT_MAP_ZOOM: u8 = 8;

/// Zoom level used when the viewport centers on a single marker.
pub const CLOSE_MAP_ZOOM: u8 = 14;

/// Title of the marker placed at the user's own position.
pub const USER_MARKER_TITLE: &str = "You are here";

/// Maximum number of rows returned by a leaderboard query.
pub const LEADERBOARD_LIMIT: usize = 50;

/// Number of `(action, result)` pairs retained by the action result log.
pub const ACTION_LOG_CAPACITY: usize = 64;

/// Pending unlock notifications kept before the oldest are dropped.
pub const NOTIFICATION_QUEUE_CAPACITY: usize = 32;
