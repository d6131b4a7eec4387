//! Route table for the placement cell site.
//!
//! The table is an ordered list of [`RouteEntry`] values built once at
//! startup and handed to the shell. Matching walks the entries in order:
//! the root entry only matches `/` exactly, every other entry matches its
//! own path, and the fallback entry (always last) matches anything.

use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Invitation,
    ChairmanMessage,
    DirectorMessage,
    WhyRecruit,
    Brochure,
    PlacementStatistics,
    PlacementProcedure,
    RecruiterGuidelines,
    PastRecruiters,
    AipcNorms,
    Achievements,
    Prospective,
    StudentGuidelines,
    Internships,
    Jaf,
    Iaf,
    ContactUs,
    ReachUs,
    PlacementTeam,
    CareerCounselling,
    StudentLogin,
    RecruiterLogin,
    NotFound,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Invitation => "Invitation",
            Page::ChairmanMessage => "Chairman's Message",
            Page::DirectorMessage => "Director's Message",
            Page::WhyRecruit => "Why Recruit",
            Page::Brochure => "Brochure",
            Page::PlacementStatistics => "Placement Statistics",
            Page::PlacementProcedure => "Placement Procedure",
            Page::RecruiterGuidelines => "Recruiter Guidelines",
            Page::PastRecruiters => "Past Recruiters",
            Page::AipcNorms => "AIPC Norms",
            Page::Achievements => "Achievements",
            Page::Prospective => "Prospective Students",
            Page::StudentGuidelines => "Student Guidelines",
            Page::Internships => "Internships",
            Page::Jaf => "Job Announcement Form",
            Page::Iaf => "Internship Announcement Form",
            Page::ContactUs => "Contact Us",
            Page::ReachUs => "How to Reach Us",
            Page::PlacementTeam => "Placement Team",
            Page::CareerCounselling => "Career Counselling",
            Page::StudentLogin => "Student Login",
            Page::RecruiterLogin => "Recruiter Login",
            Page::NotFound => "Page Not Found",
        }
    }

    /// Navbar group the page is listed under. Home and the fallback page
    /// are not listed.
    pub fn section(self) -> Option<Section> {
        match self {
            Page::Invitation
            | Page::ChairmanMessage
            | Page::DirectorMessage
            | Page::WhyRecruit
            | Page::Brochure => Some(Section::About),
            Page::PlacementProcedure
            | Page::RecruiterGuidelines
            | Page::PastRecruiters
            | Page::AipcNorms
            | Page::Jaf
            | Page::Iaf => Some(Section::Recruiters),
            Page::Prospective
            | Page::StudentGuidelines
            | Page::Internships
            | Page::CareerCounselling => Some(Section::Students),
            Page::PlacementStatistics | Page::Achievements => Some(Section::Statistics),
            Page::ContactUs | Page::ReachUs | Page::PlacementTeam => Some(Section::Contact),
            Page::StudentLogin | Page::RecruiterLogin => Some(Section::Login),
            Page::Home | Page::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Recruiters,
    Students,
    Statistics,
    Contact,
    Login,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Recruiters,
        Section::Students,
        Section::Statistics,
        Section::Contact,
        Section::Login,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About Us",
            Section::Recruiters => "For Recruiters",
            Section::Students => "For Students",
            Section::Statistics => "Statistics",
            Section::Contact => "Contact",
            Section::Login => "Login",
        }
    }
}

/// How an entry's path is compared against the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// Byte-for-byte equality. Reserved for the root entry.
    Exact,
    /// Equality after dropping trailing slashes from the location.
    Path,
    /// Matches any location. Must be the last entry.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub rule: Match,
    pub page: Page,
}

impl RouteEntry {
    pub const fn exact(path: &'static str, page: Page) -> Self {
        Self { path, rule: Match::Exact, page }
    }

    pub const fn path(path: &'static str, page: Page) -> Self {
        Self { path, rule: Match::Path, page }
    }

    pub const fn fallback(page: Page) -> Self {
        Self { path: "*", rule: Match::Fallback, page }
    }

    fn matches(&self, location: &str) -> bool {
        match self.rule {
            Match::Exact => location == self.path,
            Match::Path => strip_trailing_slashes(location) == self.path,
            Match::Fallback => true,
        }
    }
}

fn strip_trailing_slashes(location: &str) -> &str {
    let trimmed = location.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route path {0:?} must start with '/'")]
    RelativePath(&'static str),
    #[error("route path {0:?} is declared more than once")]
    DuplicatePath(&'static str),
    #[error("no exact-match root route \"/\" declared")]
    MissingRoot,
    #[error("only the root route may be exact-match, found {0:?}")]
    ExtraExact(&'static str),
    #[error("no fallback route declared")]
    MissingFallback,
    #[error("more than one fallback route declared")]
    MultipleFallbacks,
    #[error("fallback route must be the last entry")]
    FallbackNotLast,
}

/// Ordered, immutable route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        let mut has_root = false;
        let mut fallbacks = 0usize;

        for entry in &entries {
            match entry.rule {
                Match::Fallback => {
                    fallbacks += 1;
                    continue;
                }
                Match::Exact if entry.path != "/" => {
                    return Err(RouteTableError::ExtraExact(entry.path));
                }
                Match::Exact => has_root = true,
                Match::Path => {}
            }
            if !entry.path.starts_with('/') {
                return Err(RouteTableError::RelativePath(entry.path));
            }
            if !seen.insert(entry.path) {
                return Err(RouteTableError::DuplicatePath(entry.path));
            }
        }

        if !has_root {
            return Err(RouteTableError::MissingRoot);
        }
        match fallbacks {
            0 => return Err(RouteTableError::MissingFallback),
            1 => {}
            _ => return Err(RouteTableError::MultipleFallbacks),
        }
        if entries.last().map(|e| e.rule) != Some(Match::Fallback) {
            return Err(RouteTableError::FallbackNotLast);
        }

        Ok(Self { entries })
    }

    /// The site's routes, in the order the navbar lists them.
    pub fn placement_cell() -> Self {
        Self {
            entries: vec![
                RouteEntry::exact("/", Page::Home),
                RouteEntry::path("/Invitation", Page::Invitation),
                RouteEntry::path("/ChairmanMessage", Page::ChairmanMessage),
                RouteEntry::path("/DirectorMessage", Page::DirectorMessage),
                RouteEntry::path("/WhyRecruit", Page::WhyRecruit),
                RouteEntry::path("/Brochure", Page::Brochure),
                RouteEntry::path("/PlacementStatistics", Page::PlacementStatistics),
                RouteEntry::path("/PlacementProcedure", Page::PlacementProcedure),
                RouteEntry::path("/RecruiterGuidelines", Page::RecruiterGuidelines),
                RouteEntry::path("/PastRecruiters", Page::PastRecruiters),
                RouteEntry::path("/AIPCNorms", Page::AipcNorms),
                RouteEntry::path("/Achievements", Page::Achievements),
                RouteEntry::path("/Prospective", Page::Prospective),
                RouteEntry::path("/StudentGuidelines", Page::StudentGuidelines),
                RouteEntry::path("/Internships", Page::Internships),
                RouteEntry::path("/JAF", Page::Jaf),
                RouteEntry::path("/IAF", Page::Iaf),
                RouteEntry::path("/ContactUs", Page::ContactUs),
                RouteEntry::path("/ReachUs", Page::ReachUs),
                RouteEntry::path("/PlacementTeam", Page::PlacementTeam),
                RouteEntry::path("/CareerCounselling", Page::CareerCounselling),
                RouteEntry::path("/StudentLogin", Page::StudentLogin),
                RouteEntry::path("/RecruiterLogin", Page::RecruiterLogin),
                RouteEntry::fallback(Page::NotFound),
            ],
        }
    }

    pub fn resolve(&self, location: &str) -> Page {
        for entry in &self.entries {
            if entry.matches(location) {
                if entry.rule == Match::Fallback {
                    tracing::debug!(location, "no route matched, using fallback");
                }
                return entry.page;
            }
        }
        // Unreachable for validated tables: the fallback always matches.
        Page::NotFound
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn path_of(&self, page: Page) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.page == page && e.rule != Match::Fallback)
            .map(|e| e.path)
    }

    pub fn section_entries(&self, section: Section) -> impl Iterator<Item = &RouteEntry> {
        self.entries
            .iter()
            .filter(move |e| e.rule != Match::Fallback && e.page.section() == Some(section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(table: &RouteTable) -> Vec<RouteEntry> {
        table
            .entries()
            .iter()
            .filter(|e| e.rule != Match::Fallback)
            .cloned()
            .collect()
    }

    #[test]
    fn placement_table_passes_validation() {
        let table = RouteTable::placement_cell();
        let rebuilt = RouteTable::new(table.entries().to_vec()).unwrap();
        assert_eq!(rebuilt, table);
        assert_eq!(table.entries().len(), 24);
    }

    #[test]
    fn every_declared_path_resolves_to_its_page() {
        let table = RouteTable::placement_cell();
        for entry in declared(&table) {
            assert_eq!(table.resolve(entry.path), entry.page, "path {}", entry.path);
        }
    }

    #[test]
    fn unknown_paths_fall_back() {
        let table = RouteTable::placement_cell();
        assert_eq!(table.resolve("/doesnotexist"), Page::NotFound);
        assert_eq!(table.resolve("/Invitation/extra"), Page::NotFound);
        assert_eq!(table.resolve(""), Page::NotFound);
    }

    #[test]
    fn root_is_exact_only() {
        let table = RouteTable::placement_cell();
        assert_eq!(table.resolve("/"), Page::Home);
        assert_eq!(table.resolve("/ExtraSegment"), Page::NotFound);
        assert_eq!(table.resolve("//"), Page::NotFound);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let table = RouteTable::placement_cell();
        assert_eq!(table.resolve("/invitation"), Page::NotFound);
        assert_eq!(table.resolve("/jaf"), Page::NotFound);
        assert_eq!(table.resolve("/JAF"), Page::Jaf);
    }

    #[test]
    fn trailing_slashes_are_ignored_for_named_routes() {
        let table = RouteTable::placement_cell();
        assert_eq!(table.resolve("/Invitation/"), Page::Invitation);
        assert_eq!(table.resolve("/ContactUs//"), Page::ContactUs);
    }

    #[test]
    fn permuting_named_routes_keeps_resolution() {
        let table = RouteTable::placement_cell();
        let entries = table.entries();
        let root = entries[0].clone();
        let fallback = entries[entries.len() - 1].clone();
        let mut middle = entries[1..entries.len() - 1].to_vec();

        let mut probes: Vec<&str> = entries.iter().map(|e| e.path).collect();
        probes.extend(["/nope", "/ExtraSegment", "/Brochure/", "/iaf"]);

        for shift in [1, 7, 13] {
            middle.rotate_left(shift);
            middle.reverse();
            let mut permuted = vec![root.clone()];
            permuted.extend(middle.iter().cloned());
            permuted.push(fallback.clone());
            let permuted = RouteTable::new(permuted).unwrap();

            for probe in &probes {
                assert_eq!(permuted.resolve(probe), table.resolve(probe), "probe {probe}");
            }
        }
    }

    #[test]
    fn rejects_duplicate_paths() {
        let err = RouteTable::new(vec![
            RouteEntry::exact("/", Page::Home),
            RouteEntry::path("/JAF", Page::Jaf),
            RouteEntry::path("/JAF", Page::Iaf),
            RouteEntry::fallback(Page::NotFound),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicatePath("/JAF"));
    }

    #[test]
    fn rejects_missing_root_and_extra_exact() {
        let err = RouteTable::new(vec![
            RouteEntry::path("/JAF", Page::Jaf),
            RouteEntry::fallback(Page::NotFound),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::MissingRoot);

        let err = RouteTable::new(vec![
            RouteEntry::exact("/", Page::Home),
            RouteEntry::exact("/JAF", Page::Jaf),
            RouteEntry::fallback(Page::NotFound),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::ExtraExact("/JAF"));
    }

    #[test]
    fn rejects_bad_fallback_placement() {
        let err = RouteTable::new(vec![RouteEntry::exact("/", Page::Home)]).unwrap_err();
        assert_eq!(err, RouteTableError::MissingFallback);

        let err = RouteTable::new(vec![
            RouteEntry::exact("/", Page::Home),
            RouteEntry::fallback(Page::NotFound),
            RouteEntry::path("/JAF", Page::Jaf),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::FallbackNotLast);

        let err = RouteTable::new(vec![
            RouteEntry::exact("/", Page::Home),
            RouteEntry::fallback(Page::NotFound),
            RouteEntry::fallback(Page::Home),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::MultipleFallbacks);
    }

    #[test]
    fn rejects_relative_paths() {
        let err = RouteTable::new(vec![
            RouteEntry::exact("/", Page::Home),
            RouteEntry::path("JAF", Page::Jaf),
            RouteEntry::fallback(Page::NotFound),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::RelativePath("JAF"));
    }

    #[test]
    fn sections_list_routes_in_table_order() {
        let table = RouteTable::placement_cell();
        let contact: Vec<Page> = table.section_entries(Section::Contact).map(|e| e.page).collect();
        assert_eq!(contact, vec![Page::ContactUs, Page::ReachUs, Page::PlacementTeam]);

        let listed: usize = Section::ALL
            .iter()
            .map(|s| table.section_entries(*s).count())
            .sum();
        // everything except Home and the fallback
        assert_eq!(listed, 22);
    }

    #[test]
    fn path_of_skips_fallback() {
        let table = RouteTable::placement_cell();
        assert_eq!(table.path_of(Page::Home), Some("/"));
        assert_eq!(table.path_of(Page::Iaf), Some("/IAF"));
        assert_eq!(table.path_of(Page::NotFound), None);
    }
}
