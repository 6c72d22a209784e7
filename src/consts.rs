/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for April
pub const APRIL: u8 = 4;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Upper-case month names used in calendar headers (index 0 unused)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Days in a week, used for weekday arithmetic
pub const DAYS_PER_WEEK: i64 = 7;

/// Weekday of 1970-01-01 counted from Sunday = 0 (a Thursday)
pub(crate) const EPOCH_WEEKDAY: i64 = 4;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one 400-year Gregorian era
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01 in the proleptic Gregorian calendar
pub(crate) const CIVIL_EPOCH_OFFSET: i64 = 719_468;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Month-first format separator (US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';

// --- rental calendar policy ---

/// Year of the first navigable calendar month
pub const CALENDAR_YEAR: u16 = 2026;
/// First navigable month (inclusive)
pub const CALENDAR_FIRST_MONTH: u8 = FEBRUARY;
/// Last navigable month (inclusive)
pub const CALENDAR_LAST_MONTH: u8 = APRIL;
/// Day the quick-duration shortcuts start from
pub const QUICK_SELECT_DAY: u8 = MIN_DAY;

/// Daily rental rate in whole currency units
pub const DEFAULT_DAILY_RATE: u64 = 45;
/// Minimum nights between start and end of a rental
pub const MIN_RENTAL_DAYS: u32 = 2;

// --- money ---

/// Minor units per whole currency unit
pub const CENTS_PER_UNIT: u64 = 100;
/// Currency symbol shown in prices
pub const CURRENCY_SYMBOL: &str = "€";

// --- listing wizard policy ---

/// Number of wizard steps
pub const TOTAL_STEPS: u8 = 4;
/// Maximum number of photos per listing
pub const MAX_PHOTOS: usize = 8;
/// Minimum trimmed length of an item name
pub const MIN_ITEM_NAME_LEN: usize = 3;
/// Minimum trimmed length of a description
pub const MIN_DESCRIPTION_LEN: usize = 10;
/// Minimum accepted daily price in whole currency units
pub const MIN_DAILY_PRICE: u64 = 1;
/// Description length above which the counter warns
pub const DESCRIPTION_SOFT_LIMIT: usize = 500;
/// Default minimum rental length captured on the pricing step
pub const DEFAULT_MIN_RENTAL: &str = "1";

/// Days priced into a suggested weekly rate
pub const DAYS_PER_WEEK_PRICE: u64 = 7;
/// Days priced into a suggested monthly rate
pub const DAYS_PER_MONTH_PRICE: u64 = 30;
/// Weekly suggestion keeps this percentage of the daily total (15% off)
pub const WEEKLY_PRICE_PERCENT: u64 = 85;
/// Monthly suggestion keeps this percentage of the daily total (25% off)
pub const MONTHLY_PRICE_PERCENT: u64 = 75;

/// Content-type prefix accepted by photo upload
pub const IMAGE_MIME_PREFIX: &str = "image/";

// --- storefront ---

/// Slides in the product gallery
pub const GALLERY_SLIDES: usize = 5;

/// Query parameter value that opens the storefront in sell mode
pub const SELL_MODE_PARAM: &str = "sell";

/// Rotating search placeholders shown in buy mode
pub const SEARCH_PLACEHOLDERS: [&str; 20] = [
    "Flamingos..",
    "My Toothbrush..",
    "Macbook Air..",
    "Sony Alpha 7iii..",
    "Director Germany..",
    "Waldo..",
    "Nemo..",
    "Happiness..",
    "Brown Chair..",
    "Motivation..",
    "DJI Force Pro..",
    "Manfrotto Video Stativ..",
    "Penthouse..",
    "Atelier..",
    "Barbie`s Dreamhouse..",
    "Best Boy..",
    "Production Assistant..",
    "Blackmagic Pocket Cinema..",
    "4K Monitor..",
    "Light Box..",
];
