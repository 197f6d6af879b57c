/// Published spreadsheet export used when FEED_URL is not set
pub const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vT-5j3rZHVbVl3fdH6Up-V_eRkb35Qb6Hev1cY0FQgi6RKGrinIiJdDkBno-XxPHMpKO_3MK6Npwakb/pub?gid=0&single=true&output=csv";

/// Timezone used to decide what "today" is when TIMEZONE is not set
pub const DEFAULT_TIMEZONE: &str = "Europe/Moscow";

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Placeholder shown when nobody has a birthday today
pub const EMPTY_DAY_MESSAGE: &str = "В этот день никто не родился";

/// Placeholder shown when nobody has a birthday in the upcoming window
pub const EMPTY_WEEK_MESSAGE: &str = "В ближайшие дни никто не родился";

/// Placeholder shown when nobody has a birthday in the selected month
pub const EMPTY_MONTH_MESSAGE: &str = "В этом месяце никто не родился";

/// Number of days covered by the upcoming view, starting tomorrow
pub const UPCOMING_DAYS: i64 = 7;

/// Items per page in the paginated "all" list
pub const PAGE_ITEMS: usize = 10;

/// Page links shown on each side of the current page
pub const PAGINATION_INNER_WINDOW: usize = 1;

/// Page links always shown at the start and end of the pager
pub const PAGINATION_OUTER_WINDOW: usize = 1;

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "birthday_board=info";
