//! Site configuration resolver.
//!
//! Merges the stored `site_settings` key/value map with the compiled-in
//! default copy to produce one typed configuration struct per page context.
//! This is the single place defaults live; views consume the resolved structs
//! and never fall back on their own.
//!
//! Resolution rules:
//! - a stored, non-empty value wins over the default for its key;
//! - an absent key or an empty-string value falls back to the default;
//! - stored keys that match no known setting are ignored;
//! - boolean flags compare the literal strings `"true"`/`"false"` against the
//!   flag's own default polarity;
//! - the comma-separated amount list drops unparseable elements and falls
//!   back to the whole default list when nothing survives;
//! - defaults that mention other settings (the apply-page eligibility window
//!   and badge year) interpolate the *resolved* values of those settings.
//!
//! Resolution never fails: malformed or partially migrated settings degrade
//! to the nearest well-formed default.

use serde::Serialize;
use std::collections::HashMap;

/// Stored overrides, as returned by the settings repository.
pub type SettingsMap = HashMap<String, String>;

/// Effective value for a text setting.
fn text(settings: &SettingsMap, key: &str, default: &str) -> String {
    match settings.get(key) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => default.to_string(),
    }
}

/// Effective value for a boolean flag stored as `"true"`/`"false"`.
///
/// A default-true flag turns off only when the stored value is exactly
/// `"false"`; a default-false flag turns on only when it is exactly `"true"`.
/// Absent and empty values yield the default either way.
fn flag(settings: &SettingsMap, key: &str, default: bool) -> bool {
    match settings.get(key).map(String::as_str) {
        Some(value) if !value.is_empty() => {
            if default {
                value != "false"
            } else {
                value == "true"
            }
        }
        _ => default,
    }
}

/// Effective value for a comma-separated numeric list.
///
/// Elements that fail to parse as a finite number are dropped; if none
/// survive, the full default list applies.
fn number_list(settings: &SettingsMap, key: &str, default: &[f64]) -> Vec<f64> {
    let parsed: Vec<f64> = match settings.get(key) {
        Some(value) if !value.is_empty() => value
            .split(',')
            .filter_map(|part| part.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .collect(),
        _ => Vec::new(),
    };
    if parsed.is_empty() {
        default.to_vec()
    } else {
        parsed
    }
}

/// Organization-wide settings shared by several pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralConfig {
    pub organization_name: String,
    pub tagline: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub application_start_date: String,
    pub application_end_date: String,
    pub current_year: String,
}

impl GeneralConfig {
    pub fn resolve(settings: &SettingsMap) -> Self {
        Self {
            organization_name: text(settings, "organizationName", "Goodfellows of Lee County"),
            tagline: text(settings, "tagline", "108 years of helping those in need"),
            email: text(settings, "email", "info@goodfellowsil.org"),
            address: text(settings, "address", "704 S. Lincoln Ave"),
            city: text(settings, "city", "Dixon"),
            state: text(settings, "state", "IL"),
            zip: text(settings, "zip", "61021"),
            application_start_date: text(settings, "applicationStartDate", "September 1"),
            application_end_date: text(settings, "applicationEndDate", "October 31"),
            current_year: text(settings, "currentYear", "2026"),
        }
    }
}

/// Site header: logo, navigation labels, call-to-action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    pub logo_text: String,
    pub show_logo: bool,
    pub nav_home: String,
    pub nav_volunteers: String,
    pub nav_apply: String,
    pub nav_contact: String,
    pub cta_text: String,
    pub cta_link: String,
}

impl HeaderConfig {
    pub fn resolve(settings: &SettingsMap) -> Self {
        Self {
            logo_text: text(settings, "headerLogoText", "Goodfellows"),
            show_logo: flag(settings, "headerShowLogo", true),
            nav_home: text(settings, "headerNavHome", "Home"),
            nav_volunteers: text(settings, "headerNavVolunteers", "Volunteers"),
            nav_apply: text(settings, "headerNavApply", "Apply"),
            nav_contact: text(settings, "headerNavContact", "Contact"),
            cta_text: text(settings, "headerCtaText", "Donate"),
            cta_link: text(settings, "headerCtaLink", "/#donate"),
        }
    }
}

/// Site footer copy and the admin-login link toggle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterConfig {
    pub about_text: String,
    pub show_admin_link: bool,
}

impl FooterConfig {
    pub fn resolve(settings: &SettingsMap) -> Self {
        Self {
            about_text: text(
                settings,
                "footerAboutText",
                "Helping those in need since 1918. A 100% volunteer-run organization.",
            ),
            // Shown unless an admin stores exactly "false".
            show_admin_link: flag(settings, "footerShowAdminLink", true),
        }
    }
}

/// Homepage hero and the "Why We Care" section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeConfig {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_button_text: String,
    pub hero_button_link: String,
    pub why_we_care_content: String,
}

const DEFAULT_WHY_WE_CARE: &str = "One thing we're taught at a young age is to treat others as you want to be treated. The Goodfellows of Lee County don't just follow this rule, they live it.\n\nEvery year our volunteer board of directors along with community members work to make sure every child in Lee County is treated the same — that they too, regardless of income, can have their own gift during the holiday season.";

impl HomeConfig {
    pub fn resolve(settings: &SettingsMap) -> Self {
        Self {
            hero_title: text(
                settings,
                "heroTitle",
                "What is the Goodfellows of Lee County?",
            ),
            hero_subtitle: text(
                settings,
                "heroSubtitle",
                "We are an organization that has been around 108 years helping those who need a helping hand. Our main giveaway is during the holiday season, but we assist people all year.",
            ),
            hero_button_text: text(settings, "heroButtonText", "Apply Now"),
            hero_button_link: text(settings, "heroButtonLink", "/apply"),
            why_we_care_content: text(settings, "whyWeCareContent", DEFAULT_WHY_WE_CARE),
        }
    }
}

/// Apply page: hero, eligibility list, form and PDF copy.
///
/// Two defaults here derive from other settings and therefore resolve against
/// the already-resolved [`GeneralConfig`], not the static default table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyConfig {
    pub hero_badge: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub eligibility_title: String,
    pub eligibility: [String; 4],
    pub form_title: String,
    pub pdf_title: String,
    pub pdf_text: String,
}

impl ApplyConfig {
    pub fn resolve(settings: &SettingsMap, general: &GeneralConfig) -> Self {
        let default_badge = format!("{} Applications", general.current_year);
        let default_window = format!(
            "Apply between {} - {}",
            general.application_start_date, general.application_end_date
        );
        Self {
            hero_badge: text(settings, "applyHeroBadge", &default_badge),
            hero_title: text(settings, "applyHeroTitle", "Apply for Assistance"),
            hero_subtitle: text(
                settings,
                "applyHeroSubtitle",
                "If you're a Lee County resident in need of assistance, we're here to help. Applications for holiday assistance are accepted from September 1 through October 31.",
            ),
            eligibility_title: text(settings, "applyEligibilityTitle", "Eligibility Requirements"),
            eligibility: [
                text(
                    settings,
                    "applyEligibility1",
                    "Must be a resident of Lee County, Illinois",
                ),
                text(
                    settings,
                    "applyEligibility2",
                    "Have children 17 years old or younger in the household",
                ),
                text(settings, "applyEligibility3", &default_window),
                text(settings, "applyEligibility4", "Demonstrate financial need"),
            ],
            form_title: text(settings, "applyFormTitle", "Holiday Assistance Application"),
            pdf_title: text(settings, "applyPdfTitle", "Prefer Paper?"),
            pdf_text: text(
                settings,
                "applyPdfText",
                "You can also download a PDF application and mail it in or drop it off at our office.",
            ),
        }
    }
}

/// Volunteers page: hero, ways-to-help cards, signup form copy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteersConfig {
    pub hero_badge: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub ways_title: String,
    pub way1_title: String,
    pub way1_description: String,
    pub way2_title: String,
    pub way2_description: String,
    pub way3_title: String,
    pub way3_description: String,
    pub form_title: String,
    pub form_note: String,
}

impl VolunteersConfig {
    pub fn resolve(settings: &SettingsMap) -> Self {
        Self {
            hero_badge: text(settings, "volunteersHeroBadge", "Join Our Team"),
            hero_title: text(settings, "volunteersHeroTitle", "Become a Volunteer"),
            hero_subtitle: text(
                settings,
                "volunteersHeroSubtitle",
                "The Goodfellows of Lee County is 100% volunteer-run. Every hour you contribute helps ensure that children in our community have a brighter holiday season.",
            ),
            ways_title: text(settings, "volunteersWaysTitle", "Ways to Help"),
            way1_title: text(settings, "volunteersWay1Title", "Holiday Distribution"),
            way1_description: text(
                settings,
                "volunteersWay1Description",
                "Help sort, wrap, and distribute gifts during our annual holiday giveaway event.",
            ),
            way2_title: text(settings, "volunteersWay2Title", "Application Processing"),
            way2_description: text(
                settings,
                "volunteersWay2Description",
                "Assist with reviewing and processing applications from families in need.",
            ),
            way3_title: text(settings, "volunteersWay3Title", "Community Outreach"),
            way3_description: text(
                settings,
                "volunteersWay3Description",
                "Help spread the word about our programs and fundraising efforts throughout the year.",
            ),
            form_title: text(settings, "volunteersFormTitle", "Sign Up to Volunteer"),
            form_note: text(
                settings,
                "volunteersFormNote",
                "We'll reach out to you within 2-3 business days to discuss volunteer opportunities.",
            ),
        }
    }
}

/// Contact page: hero, info cards, form copy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactConfig {
    pub hero_badge: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub info_title: String,
    pub about_title: String,
    pub about_text: String,
    pub form_title: String,
}

impl ContactConfig {
    pub fn resolve(settings: &SettingsMap) -> Self {
        Self {
            hero_badge: text(settings, "contactHeroBadge", "Get in Touch"),
            hero_title: text(settings, "contactHeroTitle", "Contact Us"),
            hero_subtitle: text(
                settings,
                "contactHeroSubtitle",
                "Have questions about our programs, want to volunteer, or need assistance? We'd love to hear from you.",
            ),
            info_title: text(settings, "contactInfoTitle", "Contact Information"),
            about_title: text(settings, "contactAboutTitle", "About Our Organization"),
            about_text: text(
                settings,
                "contactAboutText",
                "Goodfellows of Lee County is an all-volunteer organization. As we don't have regular office hours, email is the best way to reach us. We typically respond within 1-2 business days.",
            ),
            form_title: text(settings, "contactFormTitle", "Send a Message"),
        }
    }
}

/// Donation section: copy plus the preset amount buttons.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationConfig {
    pub title: String,
    pub subtitle: String,
    pub amounts: Vec<f64>,
}

pub const DEFAULT_DONATION_AMOUNTS: [f64; 4] = [25.0, 50.0, 100.0, 250.0];

impl DonationConfig {
    pub fn resolve(settings: &SettingsMap) -> Self {
        Self {
            title: text(settings, "donationTitle", "Make a Donation"),
            subtitle: text(
                settings,
                "donationSubtitle",
                "Your support helps families in Lee County.",
            ),
            amounts: number_list(settings, "donationAmounts", &DEFAULT_DONATION_AMOUNTS),
        }
    }
}

/// Theme colors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub primary_color: String,
    pub accent_color: String,
}

impl ThemeConfig {
    pub fn resolve(settings: &SettingsMap) -> Self {
        Self {
            primary_color: text(settings, "primaryColor", "#f59e0b"),
            accent_color: text(settings, "accentColor", "#0d9488"),
        }
    }
}

/// The full resolved configuration served to the public site.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub general: GeneralConfig,
    pub header: HeaderConfig,
    pub footer: FooterConfig,
    pub home: HomeConfig,
    pub apply: ApplyConfig,
    pub volunteers: VolunteersConfig,
    pub contact: ContactConfig,
    pub donation: DonationConfig,
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Resolve every page context against the stored overrides.
    ///
    /// Independent contexts resolve first; contexts with derived defaults
    /// (apply) resolve afterwards against the results.
    pub fn resolve(settings: &SettingsMap) -> Self {
        let general = GeneralConfig::resolve(settings);
        let apply = ApplyConfig::resolve(settings, &general);
        Self {
            header: HeaderConfig::resolve(settings),
            footer: FooterConfig::resolve(settings),
            home: HomeConfig::resolve(settings),
            volunteers: VolunteersConfig::resolve(settings),
            contact: ContactConfig::resolve(settings),
            donation: DonationConfig::resolve(settings),
            theme: ThemeConfig::resolve(settings),
            general,
            apply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> SettingsMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_absent_key_uses_default() {
        let config = GeneralConfig::resolve(&SettingsMap::new());
        assert_eq!(config.organization_name, "Goodfellows of Lee County");
        assert_eq!(config.tagline, "108 years of helping those in need");
        assert_eq!(config.application_start_date, "September 1");
    }

    #[test]
    fn test_stored_value_wins() {
        let settings = map(&[("organizationName", "Goodfellows of Ogle County")]);
        let config = GeneralConfig::resolve(&settings);
        assert_eq!(config.organization_name, "Goodfellows of Ogle County");
        // Untouched keys still default.
        assert_eq!(config.email, "info@goodfellowsil.org");
    }

    #[test]
    fn test_empty_string_treated_as_absent() {
        let settings = map(&[("tagline", "")]);
        let config = GeneralConfig::resolve(&settings);
        assert_eq!(config.tagline, "108 years of helping those in need");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let settings = map(&[("someLegacyKey", "whatever")]);
        let config = SiteConfig::resolve(&settings);
        assert_eq!(config.general.organization_name, "Goodfellows of Lee County");
    }

    #[test]
    fn test_default_true_flag_off_only_on_literal_false() {
        assert!(FooterConfig::resolve(&SettingsMap::new()).show_admin_link);
        assert!(!FooterConfig::resolve(&map(&[("footerShowAdminLink", "false")])).show_admin_link);
        // Anything other than the literal string keeps the link visible.
        assert!(FooterConfig::resolve(&map(&[("footerShowAdminLink", "no")])).show_admin_link);
        assert!(FooterConfig::resolve(&map(&[("footerShowAdminLink", "FALSE")])).show_admin_link);
        assert!(FooterConfig::resolve(&map(&[("footerShowAdminLink", "")])).show_admin_link);
    }

    #[test]
    fn test_default_false_flag_polarity() {
        let settings = SettingsMap::new();
        // No default-false flags ship today; exercise the helper directly so
        // the polarity contract stays pinned.
        assert!(!flag(&settings, "someFlag", false));
        assert!(flag(&map(&[("someFlag", "true")]), "someFlag", false));
        assert!(!flag(&map(&[("someFlag", "yes")]), "someFlag", false));
        assert!(!flag(&map(&[("someFlag", "false")]), "someFlag", false));
    }

    #[test]
    fn test_amount_list_drops_unparseable_elements() {
        let settings = map(&[("donationAmounts", "25, 50, abc, 100")]);
        let config = DonationConfig::resolve(&settings);
        assert_eq!(config.amounts, vec![25.0, 50.0, 100.0]);
    }

    #[test]
    fn test_amount_list_falls_back_when_nothing_parses() {
        let settings = map(&[("donationAmounts", "x,y")]);
        let config = DonationConfig::resolve(&settings);
        assert_eq!(config.amounts, DEFAULT_DONATION_AMOUNTS.to_vec());
    }

    #[test]
    fn test_amount_list_rejects_non_finite() {
        let settings = map(&[("donationAmounts", "inf, NaN")]);
        let config = DonationConfig::resolve(&settings);
        assert_eq!(config.amounts, DEFAULT_DONATION_AMOUNTS.to_vec());
    }

    #[test]
    fn test_derived_eligibility_window_uses_resolved_dates() {
        let settings = map(&[
            ("applicationStartDate", "August 15"),
            ("applicationEndDate", "November 1"),
        ]);
        let config = SiteConfig::resolve(&settings);
        assert_eq!(config.apply.eligibility[2], "Apply between August 15 - November 1");
    }

    #[test]
    fn test_derived_default_yields_to_stored_override() {
        let settings = map(&[
            ("applicationStartDate", "August 15"),
            ("applyEligibility3", "Apply any time"),
        ]);
        let config = SiteConfig::resolve(&settings);
        assert_eq!(config.apply.eligibility[2], "Apply any time");
    }

    #[test]
    fn test_derived_badge_uses_resolved_year() {
        let settings = map(&[("currentYear", "2027")]);
        let config = SiteConfig::resolve(&settings);
        assert_eq!(config.apply.hero_badge, "2027 Applications");
    }

    #[test]
    fn test_resolution_never_fails_on_garbage() {
        let settings = map(&[
            ("donationAmounts", ",,,,"),
            ("headerShowLogo", "\u{0}"),
            ("heroTitle", "   "),
        ]);
        let config = SiteConfig::resolve(&settings);
        assert_eq!(config.donation.amounts, DEFAULT_DONATION_AMOUNTS.to_vec());
        // Whitespace is a stored value, not an absent one.
        assert_eq!(config.home.hero_title, "   ");
        assert!(config.header.show_logo);
    }

    #[test]
    fn test_site_config_serializes_camel_case() {
        let config = SiteConfig::resolve(&SettingsMap::new());
        let json = serde_json::to_value(&config).unwrap();
        assert!(json["general"]["organizationName"].is_string());
        assert!(json["footer"]["showAdminLink"].as_bool().unwrap());
        assert_eq!(json["donation"]["amounts"][0], 25.0);
        assert_eq!(json["apply"]["heroBadge"], "2026 Applications");
    }
}
