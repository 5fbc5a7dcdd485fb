//! Built-in device rules.
//!
//! Rules are listed in evaluation order. Earlier rules shadow later ones,
//! so e.g. a game console running Windows is a `tv` and an Android tablet
//! never reaches the Linux desktop rule.

use once_cell::sync::Lazy;
use regex::Regex;

use super::stage::{Outcome, RuleStage};
use super::DeviceType;

static SMART_TV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i-u)GoogleTV|SmartTV|Internet TV|NetCast|NETTV|AppleTV|boxee|Kylo|Roku|DLNADOC|CE-HTML",
    )
    .unwrap()
});

static TV_CONSOLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Xbox|PLAYSTATION 3|Wii").unwrap());

static IPAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)iP(a|ro)d").unwrap());
static TABLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)tablet").unwrap());
static RX_34: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)RX-34").unwrap());
static FOLIO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)FOLIO").unwrap());

static LINUX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Linux").unwrap());
static ANDROID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Android").unwrap());
// Android builds that identify a handset rather than a slate
static ANDROID_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)Fennec|mobi|HTC Magic|HTCX06HT|Nexus One|SC-02B|fone 945").unwrap()
});

static KINDLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Kindle").unwrap());
static MAC_OS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Mac OS").unwrap());
static SILK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Silk").unwrap());

// Tablets that predate Android 3.0 and so carry no "tablet" token
static LEGACY_TABLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix-u)
        GT-P10|SC-01C|SHW-M180S|SGH-T849|SCH-I800|SHW-M180L|SPH-P100|SGH-I987|zt180
        |HTC(\x20Flyer|_Flyer)|Sprint\x20ATP51|ViewPad7|pandigital(sprnova|nova)
        |Ideos\x20S7|Dell\x20Streak\x207|Advent\x20Vega|A101IT|A70BHT|MID7015|Next2|nook
        ",
    )
    .unwrap()
});
static MB511: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)MB511").unwrap());
static RUTEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)RUTEM").unwrap());

static MOBILE_BROWSER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix-u)
        BOLT|Fennec|Iris|Maemo|Minimo|Mobi|mowser|NetFront|Novarra|Prism|RX-34|Skyfire|Tear
        |XV6875|XV6975|Google\x20Wireless\x20Transcoder
        ",
    )
    .unwrap()
});

static OPERA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Opera").unwrap());
static WINDOWS_NT_5: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Windows NT 5").unwrap());
static OPERA_HANDSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)HTC|Xda|Mini|Vario|SAMSUNG-GT-i8000|SAMSUNG-SGH-i9").unwrap()
});

static WINDOWS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Windows (NT|XP|ME|9)").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Phone").unwrap());
static WINDOWS_CRAWLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)Bot|Spider|ia_archiver|NewsGator").unwrap());
static WIN_SHORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Win( ?9|NT)").unwrap());

static MACINTOSH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Macintosh|PowerPC").unwrap());

static X11: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)X11").unwrap());
static CHARLOTTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Charlotte").unwrap());

static CHROME_OS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)CrOS").unwrap());

static UNIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)Solaris|SunOS|BSD").unwrap());

static CRAWLER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix-u)
        curl|Bot|B-O-T|Crawler|Spider|Spyder|Yahoo|ia_archiver|Covario-IDS|findlinks
        |DataparkSearch|larbin|Mediapartners-Google|NG-Search|Snappy|Teoma|Jeeves|Charlotte
        |NewsGator|TinEye|Cerberian|SearchSight|Zao|Scrubby|Qseero|PycURL|Pompos|oegp|SBIder
        |yoogliFetchAgent|yacy|webcollage|VYU2|voyager|updated|truwoGPS|StackRambler|Sqworm
        |silk|semanticdiscovery|ScoutJet|Nymesis|NetResearchServer|MVAClient|mogimogi
        |Mnogosearch|Arachmo|Accoona|holmes|htdig|ichiro|webis|LinkWalker|lwp-trivial
        ",
    )
    .unwrap()
});
static MOBILE_OR_CONSOLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i-u)mobile|Playstation").unwrap());

fn is_smart_tv(ua: &str) -> bool {
    SMART_TV.is_match(ua)
}

fn is_tv_console(ua: &str) -> bool {
    TV_CONSOLE.is_match(ua)
}

fn is_tablet(ua: &str) -> bool {
    IPAD.is_match(ua) || (TABLET.is_match(ua) && !RX_34.is_match(ua)) || FOLIO.is_match(ua)
}

fn is_android_tablet(ua: &str) -> bool {
    LINUX.is_match(ua) && ANDROID.is_match(ua) && !ANDROID_PHONE.is_match(ua)
}

fn is_kindle(ua: &str) -> bool {
    KINDLE.is_match(ua) || (MAC_OS.is_match(ua) && SILK.is_match(ua))
}

fn is_legacy_tablet(ua: &str) -> bool {
    LEGACY_TABLET.is_match(ua) || (MB511.is_match(ua) && RUTEM.is_match(ua))
}

fn is_mobile_browser(ua: &str) -> bool {
    MOBILE_BROWSER.is_match(ua)
}

fn is_opera_handset(ua: &str) -> bool {
    OPERA.is_match(ua) && WINDOWS_NT_5.is_match(ua) && OPERA_HANDSET.is_match(ua)
}

fn is_windows_desktop(ua: &str) -> bool {
    (WINDOWS.is_match(ua) && !PHONE.is_match(ua) && !WINDOWS_CRAWLER.is_match(ua))
        || WIN_SHORT.is_match(ua)
}

fn is_mac_desktop(ua: &str) -> bool {
    MACINTOSH.is_match(ua) && !SILK.is_match(ua)
}

fn is_linux_desktop(ua: &str) -> bool {
    LINUX.is_match(ua) && X11.is_match(ua) && !CHARLOTTE.is_match(ua)
}

fn is_chrome_os(ua: &str) -> bool {
    CHROME_OS.is_match(ua)
}

fn is_unix_desktop(ua: &str) -> bool {
    UNIX.is_match(ua)
}

fn is_crawler(ua: &str) -> bool {
    CRAWLER.is_match(ua) && !MOBILE_OR_CONSOLE.is_match(ua)
}

/// The built-in rule list, in evaluation order.
pub fn default_rules() -> Vec<RuleStage> {
    vec![
        RuleStage::fixed("smart_tv", is_smart_tv, DeviceType::Tv),
        RuleStage::fixed("tv_console", is_tv_console, DeviceType::Tv),
        RuleStage::fixed("tablet", is_tablet, DeviceType::Tablet),
        RuleStage::fixed("android_tablet", is_android_tablet, DeviceType::Tablet),
        RuleStage::fixed("kindle", is_kindle, DeviceType::Tablet),
        RuleStage::fixed("legacy_tablet", is_legacy_tablet, DeviceType::Tablet),
        RuleStage::fixed("mobile_browser", is_mobile_browser, DeviceType::Phone),
        RuleStage::fixed("opera_handset", is_opera_handset, DeviceType::Phone),
        RuleStage::fixed("windows_desktop", is_windows_desktop, DeviceType::Desktop),
        RuleStage::fixed("mac_desktop", is_mac_desktop, DeviceType::Desktop),
        RuleStage::fixed("linux_desktop", is_linux_desktop, DeviceType::Desktop),
        RuleStage::fixed("chrome_os", is_chrome_os, DeviceType::Desktop),
        RuleStage::fixed("unix_desktop", is_unix_desktop, DeviceType::Desktop),
        RuleStage::new("crawler", is_crawler, Outcome::Bot),
    ]
}
