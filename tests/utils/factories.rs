/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use unifinder_lib::modules::directory::UniversityRecord;

pub struct UniversityFactory {
    name: String,
    country: Option<String>,
    state_province: Option<String>,
    domains: Vec<String>,
    web_pages: Vec<String>,
}

impl UniversityFactory {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            country: None,
            state_province: None,
            domains: Vec::new(),
            web_pages: Vec::new(),
        }
    }

    pub fn country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn state(mut self, state: &str) -> Self {
        self.state_province = Some(state.to_string());
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domains.push(domain.to_string());
        self
    }

    pub fn web_page(mut self, url: &str) -> Self {
        self.web_pages.push(url.to_string());
        self
    }

    pub fn build(self) -> UniversityRecord {
        UniversityRecord::new(
            self.name,
            self.country,
            self.state_province,
            self.domains,
            self.web_pages,
        )
        .expect("factory names are never blank")
    }
}

/// India sample: one Delhi record, one without state data
pub fn india_records() -> Vec<UniversityRecord> {
    vec![
        UniversityFactory::new("University of Delhi")
            .country("India")
            .state("Delhi")
            .domain("du.ac.in")
            .web_page("http://www.du.ac.in/")
            .build(),
        UniversityFactory::new("Indian Institute of Science")
            .country("India")
            .domain("iisc.ac.in")
            .web_page("https://www.iisc.ac.in/")
            .build(),
    ]
}

pub fn france_records() -> Vec<UniversityRecord> {
    vec![
        UniversityFactory::new("Sorbonne Université")
            .country("France")
            .state("Île-de-France")
            .build(),
        UniversityFactory::new("Université de Lyon").country("France").build(),
    ]
}

/// Mixed names exercising both category rules
pub fn mixed_records() -> Vec<UniversityRecord> {
    vec![
        UniversityFactory::new("Delhi Public College").state("Delhi").build(),
        UniversityFactory::new("City Institute of Technology").state("Delhi").build(),
        UniversityFactory::new("State Private Institute").state("Punjab").build(),
        UniversityFactory::new("National Defence Academy").state("Maharashtra").build(),
        UniversityFactory::new("Municipal University").build(),
        UniversityFactory::new("Government Arts College").state("Tamil Nadu").build(),
        UniversityFactory::new("Ashoka University").state("Haryana").build(),
        UniversityFactory::new("Royal Academy").state("new delhi").build(),
    ]
}

/// Hipolabs JSON for the India sample
pub const INDIA_JSON: &str = r#"[
    {
        "name": "University of Delhi",
        "country": "India",
        "alpha_two_code": "IN",
        "state-province": "Delhi",
        "domains": ["du.ac.in"],
        "web_pages": ["http://www.du.ac.in/"]
    },
    {
        "name": "Indian Institute of Science",
        "country": "India",
        "alpha_two_code": "IN",
        "state-province": null,
        "domains": ["iisc.ac.in"],
        "web_pages": ["https://www.iisc.ac.in/"]
    }
]"#;
