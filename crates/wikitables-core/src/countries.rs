//! Built-in ISO 3166-1 country table

use crate::locale::CountryLookup;

/// One ISO 3166-1 entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    /// Canonical English name
    pub name: &'static str,
    /// Everyday name where it differs from the canonical one
    pub common_name: Option<&'static str>,
}

impl Country {
    fn matches(&self, query: &str) -> bool {
        self.alpha2.eq_ignore_ascii_case(query)
            || self.alpha3.eq_ignore_ascii_case(query)
            || self.name.to_lowercase() == query.to_lowercase()
            || self
                .common_name
                .is_some_and(|n| n.to_lowercase() == query.to_lowercase())
    }
}

/// Lookup over the built-in country table
///
/// Matches alpha-2 and alpha-3 codes or the canonical or common English
/// name, ignoring case.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoCountries;

impl IsoCountries {
    /// Find the table entry for a code or name
    pub fn find(name: &str) -> Option<&'static Country> {
        let query = name.trim();
        if query.is_empty() {
            return None;
        }
        COUNTRIES.iter().find(|c| c.matches(query))
    }
}

impl CountryLookup for IsoCountries {
    fn lookup(&self, name: &str) -> Option<String> {
        Self::find(name).map(|c| c.name.to_string())
    }
}

#[rustfmt::skip]
static COUNTRIES: &[Country] = &[
    Country { alpha2: "AF", alpha3: "AFG", name: "Afghanistan", common_name: None },
    Country { alpha2: "AX", alpha3: "ALA", name: "Åland Islands", common_name: None },
    Country { alpha2: "AL", alpha3: "ALB", name: "Albania", common_name: None },
    Country { alpha2: "DZ", alpha3: "DZA", name: "Algeria", common_name: None },
    Country { alpha2: "AS", alpha3: "ASM", name: "American Samoa", common_name: None },
    Country { alpha2: "AD", alpha3: "AND", name: "Andorra", common_name: None },
    Country { alpha2: "AO", alpha3: "AGO", name: "Angola", common_name: None },
    Country { alpha2: "AI", alpha3: "AIA", name: "Anguilla", common_name: None },
    Country { alpha2: "AQ", alpha3: "ATA", name: "Antarctica", common_name: None },
    Country { alpha2: "AG", alpha3: "ATG", name: "Antigua and Barbuda", common_name: None },
    Country { alpha2: "AR", alpha3: "ARG", name: "Argentina", common_name: None },
    Country { alpha2: "AM", alpha3: "ARM", name: "Armenia", common_name: None },
    Country { alpha2: "AW", alpha3: "ABW", name: "Aruba", common_name: None },
    Country { alpha2: "AU", alpha3: "AUS", name: "Australia", common_name: None },
    Country { alpha2: "AT", alpha3: "AUT", name: "Austria", common_name: None },
    Country { alpha2: "AZ", alpha3: "AZE", name: "Azerbaijan", common_name: None },
    Country { alpha2: "BS", alpha3: "BHS", name: "Bahamas", common_name: None },
    Country { alpha2: "BH", alpha3: "BHR", name: "Bahrain", common_name: None },
    Country { alpha2: "BD", alpha3: "BGD", name: "Bangladesh", common_name: None },
    Country { alpha2: "BB", alpha3: "BRB", name: "Barbados", common_name: None },
    Country { alpha2: "BY", alpha3: "BLR", name: "Belarus", common_name: None },
    Country { alpha2: "BE", alpha3: "BEL", name: "Belgium", common_name: None },
    Country { alpha2: "BZ", alpha3: "BLZ", name: "Belize", common_name: None },
    Country { alpha2: "BJ", alpha3: "BEN", name: "Benin", common_name: None },
    Country { alpha2: "BM", alpha3: "BMU", name: "Bermuda", common_name: None },
    Country { alpha2: "BT", alpha3: "BTN", name: "Bhutan", common_name: None },
    Country { alpha2: "BO", alpha3: "BOL", name: "Bolivia, Plurinational State of", common_name: Some("Bolivia") },
    Country { alpha2: "BQ", alpha3: "BES", name: "Bonaire, Sint Eustatius and Saba", common_name: None },
    Country { alpha2: "BA", alpha3: "BIH", name: "Bosnia and Herzegovina", common_name: None },
    Country { alpha2: "BW", alpha3: "BWA", name: "Botswana", common_name: None },
    Country { alpha2: "BV", alpha3: "BVT", name: "Bouvet Island", common_name: None },
    Country { alpha2: "BR", alpha3: "BRA", name: "Brazil", common_name: None },
    Country { alpha2: "IO", alpha3: "IOT", name: "British Indian Ocean Territory", common_name: None },
    Country { alpha2: "BN", alpha3: "BRN", name: "Brunei Darussalam", common_name: None },
    Country { alpha2: "BG", alpha3: "BGR", name: "Bulgaria", common_name: None },
    Country { alpha2: "BF", alpha3: "BFA", name: "Burkina Faso", common_name: None },
    Country { alpha2: "BI", alpha3: "BDI", name: "Burundi", common_name: None },
    Country { alpha2: "CV", alpha3: "CPV", name: "Cabo Verde", common_name: None },
    Country { alpha2: "KH", alpha3: "KHM", name: "Cambodia", common_name: None },
    Country { alpha2: "CM", alpha3: "CMR", name: "Cameroon", common_name: None },
    Country { alpha2: "CA", alpha3: "CAN", name: "Canada", common_name: None },
    Country { alpha2: "KY", alpha3: "CYM", name: "Cayman Islands", common_name: None },
    Country { alpha2: "CF", alpha3: "CAF", name: "Central African Republic", common_name: None },
    Country { alpha2: "TD", alpha3: "TCD", name: "Chad", common_name: None },
    Country { alpha2: "CL", alpha3: "CHL", name: "Chile", common_name: None },
    Country { alpha2: "CN", alpha3: "CHN", name: "China", common_name: None },
    Country { alpha2: "CX", alpha3: "CXR", name: "Christmas Island", common_name: None },
    Country { alpha2: "CC", alpha3: "CCK", name: "Cocos (Keeling) Islands", common_name: None },
    Country { alpha2: "CO", alpha3: "COL", name: "Colombia", common_name: None },
    Country { alpha2: "KM", alpha3: "COM", name: "Comoros", common_name: None },
    Country { alpha2: "CG", alpha3: "COG", name: "Congo", common_name: None },
    Country { alpha2: "CD", alpha3: "COD", name: "Congo, The Democratic Republic of the", common_name: None },
    Country { alpha2: "CK", alpha3: "COK", name: "Cook Islands", common_name: None },
    Country { alpha2: "CR", alpha3: "CRI", name: "Costa Rica", common_name: None },
    Country { alpha2: "CI", alpha3: "CIV", name: "Côte d'Ivoire", common_name: None },
    Country { alpha2: "HR", alpha3: "HRV", name: "Croatia", common_name: None },
    Country { alpha2: "CU", alpha3: "CUB", name: "Cuba", common_name: None },
    Country { alpha2: "CW", alpha3: "CUW", name: "Curaçao", common_name: None },
    Country { alpha2: "CY", alpha3: "CYP", name: "Cyprus", common_name: None },
    Country { alpha2: "CZ", alpha3: "CZE", name: "Czechia", common_name: None },
    Country { alpha2: "DK", alpha3: "DNK", name: "Denmark", common_name: None },
    Country { alpha2: "DJ", alpha3: "DJI", name: "Djibouti", common_name: None },
    Country { alpha2: "DM", alpha3: "DMA", name: "Dominica", common_name: None },
    Country { alpha2: "DO", alpha3: "DOM", name: "Dominican Republic", common_name: None },
    Country { alpha2: "EC", alpha3: "ECU", name: "Ecuador", common_name: None },
    Country { alpha2: "EG", alpha3: "EGY", name: "Egypt", common_name: None },
    Country { alpha2: "SV", alpha3: "SLV", name: "El Salvador", common_name: None },
    Country { alpha2: "GQ", alpha3: "GNQ", name: "Equatorial Guinea", common_name: None },
    Country { alpha2: "ER", alpha3: "ERI", name: "Eritrea", common_name: None },
    Country { alpha2: "EE", alpha3: "EST", name: "Estonia", common_name: None },
    Country { alpha2: "SZ", alpha3: "SWZ", name: "Eswatini", common_name: None },
    Country { alpha2: "ET", alpha3: "ETH", name: "Ethiopia", common_name: None },
    Country { alpha2: "FK", alpha3: "FLK", name: "Falkland Islands (Malvinas)", common_name: None },
    Country { alpha2: "FO", alpha3: "FRO", name: "Faroe Islands", common_name: None },
    Country { alpha2: "FJ", alpha3: "FJI", name: "Fiji", common_name: None },
    Country { alpha2: "FI", alpha3: "FIN", name: "Finland", common_name: None },
    Country { alpha2: "FR", alpha3: "FRA", name: "France", common_name: None },
    Country { alpha2: "GF", alpha3: "GUF", name: "French Guiana", common_name: None },
    Country { alpha2: "PF", alpha3: "PYF", name: "French Polynesia", common_name: None },
    Country { alpha2: "TF", alpha3: "ATF", name: "French Southern Territories", common_name: None },
    Country { alpha2: "GA", alpha3: "GAB", name: "Gabon", common_name: None },
    Country { alpha2: "GM", alpha3: "GMB", name: "Gambia", common_name: None },
    Country { alpha2: "GE", alpha3: "GEO", name: "Georgia", common_name: None },
    Country { alpha2: "DE", alpha3: "DEU", name: "Germany", common_name: None },
    Country { alpha2: "GH", alpha3: "GHA", name: "Ghana", common_name: None },
    Country { alpha2: "GI", alpha3: "GIB", name: "Gibraltar", common_name: None },
    Country { alpha2: "GR", alpha3: "GRC", name: "Greece", common_name: None },
    Country { alpha2: "GL", alpha3: "GRL", name: "Greenland", common_name: None },
    Country { alpha2: "GD", alpha3: "GRD", name: "Grenada", common_name: None },
    Country { alpha2: "GP", alpha3: "GLP", name: "Guadeloupe", common_name: None },
    Country { alpha2: "GU", alpha3: "GUM", name: "Guam", common_name: None },
    Country { alpha2: "GT", alpha3: "GTM", name: "Guatemala", common_name: None },
    Country { alpha2: "GG", alpha3: "GGY", name: "Guernsey", common_name: None },
    Country { alpha2: "GN", alpha3: "GIN", name: "Guinea", common_name: None },
    Country { alpha2: "GW", alpha3: "GNB", name: "Guinea-Bissau", common_name: None },
    Country { alpha2: "GY", alpha3: "GUY", name: "Guyana", common_name: None },
    Country { alpha2: "HT", alpha3: "HTI", name: "Haiti", common_name: None },
    Country { alpha2: "HM", alpha3: "HMD", name: "Heard Island and McDonald Islands", common_name: None },
    Country { alpha2: "VA", alpha3: "VAT", name: "Holy See (Vatican City State)", common_name: None },
    Country { alpha2: "HN", alpha3: "HND", name: "Honduras", common_name: None },
    Country { alpha2: "HK", alpha3: "HKG", name: "Hong Kong", common_name: None },
    Country { alpha2: "HU", alpha3: "HUN", name: "Hungary", common_name: None },
    Country { alpha2: "IS", alpha3: "ISL", name: "Iceland", common_name: None },
    Country { alpha2: "IN", alpha3: "IND", name: "India", common_name: None },
    Country { alpha2: "ID", alpha3: "IDN", name: "Indonesia", common_name: None },
    Country { alpha2: "IR", alpha3: "IRN", name: "Iran, Islamic Republic of", common_name: Some("Iran") },
    Country { alpha2: "IQ", alpha3: "IRQ", name: "Iraq", common_name: None },
    Country { alpha2: "IE", alpha3: "IRL", name: "Ireland", common_name: None },
    Country { alpha2: "IM", alpha3: "IMN", name: "Isle of Man", common_name: None },
    Country { alpha2: "IL", alpha3: "ISR", name: "Israel", common_name: None },
    Country { alpha2: "IT", alpha3: "ITA", name: "Italy", common_name: None },
    Country { alpha2: "JM", alpha3: "JAM", name: "Jamaica", common_name: None },
    Country { alpha2: "JP", alpha3: "JPN", name: "Japan", common_name: None },
    Country { alpha2: "JE", alpha3: "JEY", name: "Jersey", common_name: None },
    Country { alpha2: "JO", alpha3: "JOR", name: "Jordan", common_name: None },
    Country { alpha2: "KZ", alpha3: "KAZ", name: "Kazakhstan", common_name: None },
    Country { alpha2: "KE", alpha3: "KEN", name: "Kenya", common_name: None },
    Country { alpha2: "KI", alpha3: "KIR", name: "Kiribati", common_name: None },
    Country { alpha2: "KP", alpha3: "PRK", name: "Korea, Democratic People's Republic of", common_name: Some("North Korea") },
    Country { alpha2: "KR", alpha3: "KOR", name: "Korea, Republic of", common_name: Some("South Korea") },
    Country { alpha2: "KW", alpha3: "KWT", name: "Kuwait", common_name: None },
    Country { alpha2: "KG", alpha3: "KGZ", name: "Kyrgyzstan", common_name: None },
    Country { alpha2: "LA", alpha3: "LAO", name: "Lao People's Democratic Republic", common_name: Some("Laos") },
    Country { alpha2: "LV", alpha3: "LVA", name: "Latvia", common_name: None },
    Country { alpha2: "LB", alpha3: "LBN", name: "Lebanon", common_name: None },
    Country { alpha2: "LS", alpha3: "LSO", name: "Lesotho", common_name: None },
    Country { alpha2: "LR", alpha3: "LBR", name: "Liberia", common_name: None },
    Country { alpha2: "LY", alpha3: "LBY", name: "Libya", common_name: None },
    Country { alpha2: "LI", alpha3: "LIE", name: "Liechtenstein", common_name: None },
    Country { alpha2: "LT", alpha3: "LTU", name: "Lithuania", common_name: None },
    Country { alpha2: "LU", alpha3: "LUX", name: "Luxembourg", common_name: None },
    Country { alpha2: "MO", alpha3: "MAC", name: "Macao", common_name: None },
    Country { alpha2: "MG", alpha3: "MDG", name: "Madagascar", common_name: None },
    Country { alpha2: "MW", alpha3: "MWI", name: "Malawi", common_name: None },
    Country { alpha2: "MY", alpha3: "MYS", name: "Malaysia", common_name: None },
    Country { alpha2: "MV", alpha3: "MDV", name: "Maldives", common_name: None },
    Country { alpha2: "ML", alpha3: "MLI", name: "Mali", common_name: None },
    Country { alpha2: "MT", alpha3: "MLT", name: "Malta", common_name: None },
    Country { alpha2: "MH", alpha3: "MHL", name: "Marshall Islands", common_name: None },
    Country { alpha2: "MQ", alpha3: "MTQ", name: "Martinique", common_name: None },
    Country { alpha2: "MR", alpha3: "MRT", name: "Mauritania", common_name: None },
    Country { alpha2: "MU", alpha3: "MUS", name: "Mauritius", common_name: None },
    Country { alpha2: "YT", alpha3: "MYT", name: "Mayotte", common_name: None },
    Country { alpha2: "MX", alpha3: "MEX", name: "Mexico", common_name: None },
    Country { alpha2: "FM", alpha3: "FSM", name: "Micronesia, Federated States of", common_name: None },
    Country { alpha2: "MD", alpha3: "MDA", name: "Moldova, Republic of", common_name: Some("Moldova") },
    Country { alpha2: "MC", alpha3: "MCO", name: "Monaco", common_name: None },
    Country { alpha2: "MN", alpha3: "MNG", name: "Mongolia", common_name: None },
    Country { alpha2: "ME", alpha3: "MNE", name: "Montenegro", common_name: None },
    Country { alpha2: "MS", alpha3: "MSR", name: "Montserrat", common_name: None },
    Country { alpha2: "MA", alpha3: "MAR", name: "Morocco", common_name: None },
    Country { alpha2: "MZ", alpha3: "MOZ", name: "Mozambique", common_name: None },
    Country { alpha2: "MM", alpha3: "MMR", name: "Myanmar", common_name: None },
    Country { alpha2: "NA", alpha3: "NAM", name: "Namibia", common_name: None },
    Country { alpha2: "NR", alpha3: "NRU", name: "Nauru", common_name: None },
    Country { alpha2: "NP", alpha3: "NPL", name: "Nepal", common_name: None },
    Country { alpha2: "NL", alpha3: "NLD", name: "Netherlands", common_name: None },
    Country { alpha2: "NC", alpha3: "NCL", name: "New Caledonia", common_name: None },
    Country { alpha2: "NZ", alpha3: "NZL", name: "New Zealand", common_name: None },
    Country { alpha2: "NI", alpha3: "NIC", name: "Nicaragua", common_name: None },
    Country { alpha2: "NE", alpha3: "NER", name: "Niger", common_name: None },
    Country { alpha2: "NG", alpha3: "NGA", name: "Nigeria", common_name: None },
    Country { alpha2: "NU", alpha3: "NIU", name: "Niue", common_name: None },
    Country { alpha2: "NF", alpha3: "NFK", name: "Norfolk Island", common_name: None },
    Country { alpha2: "MK", alpha3: "MKD", name: "North Macedonia", common_name: None },
    Country { alpha2: "MP", alpha3: "MNP", name: "Northern Mariana Islands", common_name: None },
    Country { alpha2: "NO", alpha3: "NOR", name: "Norway", common_name: None },
    Country { alpha2: "OM", alpha3: "OMN", name: "Oman", common_name: None },
    Country { alpha2: "PK", alpha3: "PAK", name: "Pakistan", common_name: None },
    Country { alpha2: "PW", alpha3: "PLW", name: "Palau", common_name: None },
    Country { alpha2: "PS", alpha3: "PSE", name: "Palestine, State of", common_name: None },
    Country { alpha2: "PA", alpha3: "PAN", name: "Panama", common_name: None },
    Country { alpha2: "PG", alpha3: "PNG", name: "Papua New Guinea", common_name: None },
    Country { alpha2: "PY", alpha3: "PRY", name: "Paraguay", common_name: None },
    Country { alpha2: "PE", alpha3: "PER", name: "Peru", common_name: None },
    Country { alpha2: "PH", alpha3: "PHL", name: "Philippines", common_name: None },
    Country { alpha2: "PN", alpha3: "PCN", name: "Pitcairn", common_name: None },
    Country { alpha2: "PL", alpha3: "POL", name: "Poland", common_name: None },
    Country { alpha2: "PT", alpha3: "PRT", name: "Portugal", common_name: None },
    Country { alpha2: "PR", alpha3: "PRI", name: "Puerto Rico", common_name: None },
    Country { alpha2: "QA", alpha3: "QAT", name: "Qatar", common_name: None },
    Country { alpha2: "RE", alpha3: "REU", name: "Réunion", common_name: None },
    Country { alpha2: "RO", alpha3: "ROU", name: "Romania", common_name: None },
    Country { alpha2: "RU", alpha3: "RUS", name: "Russian Federation", common_name: Some("Russia") },
    Country { alpha2: "RW", alpha3: "RWA", name: "Rwanda", common_name: None },
    Country { alpha2: "BL", alpha3: "BLM", name: "Saint Barthélemy", common_name: None },
    Country { alpha2: "SH", alpha3: "SHN", name: "Saint Helena, Ascension and Tristan da Cunha", common_name: None },
    Country { alpha2: "KN", alpha3: "KNA", name: "Saint Kitts and Nevis", common_name: None },
    Country { alpha2: "LC", alpha3: "LCA", name: "Saint Lucia", common_name: None },
    Country { alpha2: "MF", alpha3: "MAF", name: "Saint Martin (French part)", common_name: None },
    Country { alpha2: "PM", alpha3: "SPM", name: "Saint Pierre and Miquelon", common_name: None },
    Country { alpha2: "VC", alpha3: "VCT", name: "Saint Vincent and the Grenadines", common_name: None },
    Country { alpha2: "WS", alpha3: "WSM", name: "Samoa", common_name: None },
    Country { alpha2: "SM", alpha3: "SMR", name: "San Marino", common_name: None },
    Country { alpha2: "ST", alpha3: "STP", name: "Sao Tome and Principe", common_name: None },
    Country { alpha2: "SA", alpha3: "SAU", name: "Saudi Arabia", common_name: None },
    Country { alpha2: "SN", alpha3: "SEN", name: "Senegal", common_name: None },
    Country { alpha2: "RS", alpha3: "SRB", name: "Serbia", common_name: None },
    Country { alpha2: "SC", alpha3: "SYC", name: "Seychelles", common_name: None },
    Country { alpha2: "SL", alpha3: "SLE", name: "Sierra Leone", common_name: None },
    Country { alpha2: "SG", alpha3: "SGP", name: "Singapore", common_name: None },
    Country { alpha2: "SX", alpha3: "SXM", name: "Sint Maarten (Dutch part)", common_name: None },
    Country { alpha2: "SK", alpha3: "SVK", name: "Slovakia", common_name: None },
    Country { alpha2: "SI", alpha3: "SVN", name: "Slovenia", common_name: None },
    Country { alpha2: "SB", alpha3: "SLB", name: "Solomon Islands", common_name: None },
    Country { alpha2: "SO", alpha3: "SOM", name: "Somalia", common_name: None },
    Country { alpha2: "ZA", alpha3: "ZAF", name: "South Africa", common_name: None },
    Country { alpha2: "GS", alpha3: "SGS", name: "South Georgia and the South Sandwich Islands", common_name: None },
    Country { alpha2: "SS", alpha3: "SSD", name: "South Sudan", common_name: None },
    Country { alpha2: "ES", alpha3: "ESP", name: "Spain", common_name: None },
    Country { alpha2: "LK", alpha3: "LKA", name: "Sri Lanka", common_name: None },
    Country { alpha2: "SD", alpha3: "SDN", name: "Sudan", common_name: None },
    Country { alpha2: "SR", alpha3: "SUR", name: "Suriname", common_name: None },
    Country { alpha2: "SJ", alpha3: "SJM", name: "Svalbard and Jan Mayen", common_name: None },
    Country { alpha2: "SE", alpha3: "SWE", name: "Sweden", common_name: None },
    Country { alpha2: "CH", alpha3: "CHE", name: "Switzerland", common_name: None },
    Country { alpha2: "SY", alpha3: "SYR", name: "Syrian Arab Republic", common_name: Some("Syria") },
    Country { alpha2: "TW", alpha3: "TWN", name: "Taiwan, Province of China", common_name: Some("Taiwan") },
    Country { alpha2: "TJ", alpha3: "TJK", name: "Tajikistan", common_name: None },
    Country { alpha2: "TZ", alpha3: "TZA", name: "Tanzania, United Republic of", common_name: Some("Tanzania") },
    Country { alpha2: "TH", alpha3: "THA", name: "Thailand", common_name: None },
    Country { alpha2: "TL", alpha3: "TLS", name: "Timor-Leste", common_name: None },
    Country { alpha2: "TG", alpha3: "TGO", name: "Togo", common_name: None },
    Country { alpha2: "TK", alpha3: "TKL", name: "Tokelau", common_name: None },
    Country { alpha2: "TO", alpha3: "TON", name: "Tonga", common_name: None },
    Country { alpha2: "TT", alpha3: "TTO", name: "Trinidad and Tobago", common_name: None },
    Country { alpha2: "TN", alpha3: "TUN", name: "Tunisia", common_name: None },
    Country { alpha2: "TR", alpha3: "TUR", name: "Türkiye", common_name: Some("Turkey") },
    Country { alpha2: "TM", alpha3: "TKM", name: "Turkmenistan", common_name: None },
    Country { alpha2: "TC", alpha3: "TCA", name: "Turks and Caicos Islands", common_name: None },
    Country { alpha2: "TV", alpha3: "TUV", name: "Tuvalu", common_name: None },
    Country { alpha2: "UG", alpha3: "UGA", name: "Uganda", common_name: None },
    Country { alpha2: "UA", alpha3: "UKR", name: "Ukraine", common_name: None },
    Country { alpha2: "AE", alpha3: "ARE", name: "United Arab Emirates", common_name: None },
    Country { alpha2: "GB", alpha3: "GBR", name: "United Kingdom", common_name: None },
    Country { alpha2: "US", alpha3: "USA", name: "United States", common_name: None },
    Country { alpha2: "UM", alpha3: "UMI", name: "United States Minor Outlying Islands", common_name: None },
    Country { alpha2: "UY", alpha3: "URY", name: "Uruguay", common_name: None },
    Country { alpha2: "UZ", alpha3: "UZB", name: "Uzbekistan", common_name: None },
    Country { alpha2: "VU", alpha3: "VUT", name: "Vanuatu", common_name: None },
    Country { alpha2: "VE", alpha3: "VEN", name: "Venezuela, Bolivarian Republic of", common_name: Some("Venezuela") },
    Country { alpha2: "VN", alpha3: "VNM", name: "Viet Nam", common_name: Some("Vietnam") },
    Country { alpha2: "VG", alpha3: "VGB", name: "Virgin Islands, British", common_name: None },
    Country { alpha2: "VI", alpha3: "VIR", name: "Virgin Islands, U.S.", common_name: None },
    Country { alpha2: "WF", alpha3: "WLF", name: "Wallis and Futuna", common_name: None },
    Country { alpha2: "EH", alpha3: "ESH", name: "Western Sahara", common_name: None },
    Country { alpha2: "YE", alpha3: "YEM", name: "Yemen", common_name: None },
    Country { alpha2: "ZM", alpha3: "ZMB", name: "Zambia", common_name: None },
    Country { alpha2: "ZW", alpha3: "ZWE", name: "Zimbabwe", common_name: None },
];
