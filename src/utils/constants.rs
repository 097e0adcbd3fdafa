/// PRISM Explorer URLs
pub const SINGLE_URL: &str = "https://prism.oregonstate.edu/explorer/";
pub const BULK_URL: &str = "https://prism.oregonstate.edu/explorer/bulk.php";

/// Bulk submission constraints
pub const MAX_ROWS_PER_REQUEST: usize = 500;
pub const MAX_LABEL_CHARS: usize = 12;

/// PRISM data availability bounds
pub const MIN_YEAR: i32 = 1895;

/// Location form elements
pub const LOC_METHOD_COORDS: &str = "loc_method_coords";
pub const LOC_LAT: &str = "loc_lat";
pub const LOC_LON: &str = "loc_lon";
pub const LOC_FILE: &str = "loc_file";

/// Climate variable checkboxes
pub const CVAR_PPT: &str = "cvar_ppt";
pub const CVAR_TMIN: &str = "cvar_tmin";
pub const CVAR_TMEAN: &str = "cvar_tmean";
pub const CVAR_TMAX: &str = "cvar_tmax";
pub const CVAR_VPDMIN: &str = "cvar_vpdmin";
pub const CVAR_VPDMAX: &str = "cvar_vpdmax";
pub const CVAR_TDMEAN: &str = "cvar_tdmean";
pub const CVAR_SOLTRANS: &str = "cvar_soltrans";
pub const CVAR_SOLTOTAL: &str = "cvar_soltotal";
pub const CVAR_SOLSLOPE: &str = "cvar_solslope";
pub const CVAR_SOLCLEAR: &str = "cvar_solclear";

/// Time period radio buttons
pub const TPER_MONTHLY_NORMALS: &str = "tper_monthly_normals";
pub const TPER_DAILY_NORMALS: &str = "tper_daily_normals";
pub const TPER_YEARLY: &str = "tper_yearly";
pub const TPER_ONEMONTH: &str = "tper_onemonth";
pub const TPER_MONTHLY: &str = "tper_monthly";
pub const TPER_DAILY: &str = "tper_daily";

/// Time period dropdowns
pub const TPER_YEARLY_START_YEAR: &str = "tper_yearly_start_year";
pub const TPER_YEARLY_END_YEAR: &str = "tper_yearly_end_year";
pub const TPER_ONEMONTH_MONTH: &str = "tper_onemonth_month";
pub const TPER_ONEMONTH_START_YEAR: &str = "tper_onemonth_start_year";
pub const TPER_ONEMONTH_END_YEAR: &str = "tper_onemonth_end_year";
pub const TPER_MONTHLY_START_MONTH: &str = "tper_monthly_start_month";
pub const TPER_MONTHLY_START_YEAR: &str = "tper_monthly_start_year";
pub const TPER_MONTHLY_END_MONTH: &str = "tper_monthly_end_month";
pub const TPER_MONTHLY_END_YEAR: &str = "tper_monthly_end_year";
pub const TPER_DAILY_START_DAY: &str = "tper_daily_start_day";
pub const TPER_DAILY_START_MONTH: &str = "tper_daily_start_month";
pub const TPER_DAILY_START_YEAR: &str = "tper_daily_start_year";
pub const TPER_DAILY_END_DAY: &str = "tper_daily_end_day";
pub const TPER_DAILY_END_MONTH: &str = "tper_daily_end_month";
pub const TPER_DAILY_END_YEAR: &str = "tper_daily_end_year";

/// Submission controls
pub const SUBMIT_BUTTON: &str = "submit_button";
pub const DOWNLOAD_BUTTON: &str = "download_button";
