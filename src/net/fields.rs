//! Field catalog for the three profile forms.
//!
//! DESIGN
//! ======
//! Field names are the server's flat profile schema, so the same names key
//! the draft blob, the cached profile, the submission payload, and the
//! `name` attribute of every rendered control. Each form owns a fixed,
//! ordered list; population, normalization, and page rendering all iterate
//! these lists instead of probing the page for controls.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

/// Options for the skill / concept / tool proficiency radio groups.
pub const PROFICIENCY_LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced"];
/// Options for yes/no radio groups.
pub const YES_NO: &[&str] = &["Yes", "No"];
/// Options for the residence radio group.
pub const RESIDENCE_TYPES: &[&str] = &["Day Scholar", "Hosteller"];

/// Draft key under which an uploaded photo is stored as a `data:` URI.
pub const PHOTO_FIELD: &str = "photo";

/// How a field is rendered and bound on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text-like input (`text`, `email`, `tel`, `date`, `url`, `number`).
    Input(InputType),
    /// Multi-line free text.
    TextArea,
    /// Radio group restricted to a fixed option list.
    Choice(&'static [&'static str]),
    /// File picker; only the photo uses this.
    File,
}

/// HTML input `type` attribute for [`FieldKind::Input`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Date,
    Url,
    Number,
}

impl InputType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Url => "url",
            Self::Number => "number",
        }
    }
}

/// One catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn input(name: &'static str, label: &'static str, ty: InputType) -> Self {
        Self { name, label, kind: FieldKind::Input(ty) }
    }

    const fn text(name: &'static str, label: &'static str) -> Self {
        Self::input(name, label, InputType::Text)
    }

    const fn area(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::TextArea }
    }

    const fn choice(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self { name, label, kind: FieldKind::Choice(options) }
    }

    const fn level(name: &'static str, label: &'static str) -> Self {
        Self::choice(name, label, PROFICIENCY_LEVELS)
    }

    /// Whether profile data can be written into this field's control.
    #[must_use]
    pub fn is_populatable(&self) -> bool {
        !matches!(self.kind, FieldKind::File)
    }
}

const PERSONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Full Name"),
    FieldSpec::text("roll_no", "Roll Number"),
    FieldSpec::input("date_of_birth", "Date of Birth", InputType::Date),
    FieldSpec::input("mobile_number", "Mobile Number", InputType::Tel),
    FieldSpec::input("alt_mobile_number", "Alternate Mobile", InputType::Tel),
    FieldSpec::input("personal_email", "Personal Email", InputType::Email),
    FieldSpec::input("official_email", "Official Email", InputType::Email),
    FieldSpec::input("linkedin_url", "LinkedIn Profile", InputType::Url),
    FieldSpec::text("aadhaar_no", "Aadhaar Number"),
    FieldSpec::choice("residence_type", "Residence Type", RESIDENCE_TYPES),
    FieldSpec::area("address", "Address"),
    FieldSpec::text("city", "City"),
    FieldSpec::text("pincode", "Pincode"),
    FieldSpec::text("father_name", "Father's Name"),
    FieldSpec::input("father_mobile", "Father's Mobile", InputType::Tel),
    FieldSpec::text("father_occupation", "Father's Occupation"),
    FieldSpec::text("father_company_details", "Father's Company"),
    FieldSpec::input("father_email", "Father's Email", InputType::Email),
    FieldSpec::text("mother_name", "Mother's Name"),
    FieldSpec::input("mother_mobile", "Mother's Mobile", InputType::Tel),
    FieldSpec::text("mother_occupation", "Mother's Occupation"),
    FieldSpec::input("mother_email", "Mother's Email", InputType::Email),
    FieldSpec { name: PHOTO_FIELD, label: "Photo", kind: FieldKind::File },
];

const ACADEMIC_FIELDS: &[FieldSpec] = &[
    FieldSpec::input("tenth_percentage", "10th Percentage", InputType::Number),
    FieldSpec::input("twelth_percentage", "12th Percentage", InputType::Number),
    FieldSpec::input("cgpa_sem1", "Semester 1 CGPA", InputType::Number),
    FieldSpec::input("cgpa_sem2", "Semester 2 CGPA", InputType::Number),
    FieldSpec::input("cgpa_sem3", "Semester 3 CGPA", InputType::Number),
    FieldSpec::input("cgpa_sem4", "Semester 4 CGPA", InputType::Number),
    FieldSpec::input("cgpa_overall", "Overall CGPA", InputType::Number),
    FieldSpec::input("current_backlogs", "Current Backlogs", InputType::Number),
    FieldSpec::choice("has_backlog_history", "Backlog History", YES_NO),
];

const SKILLS_FIELDS: &[FieldSpec] = &[
    FieldSpec::level("skill_c", "C"),
    FieldSpec::level("skill_cpp", "C++"),
    FieldSpec::level("skill_java", "Java"),
    FieldSpec::level("skill_python", "Python"),
    FieldSpec::level("skill_node_js", "Node.js"),
    FieldSpec::level("skill_sql", "SQL"),
    FieldSpec::level("skill_no_sql", "NoSQL"),
    FieldSpec::level("skill_web_dev", "Web Development"),
    FieldSpec::level("skill_php", "PHP"),
    FieldSpec::level("skill_flutter", "Flutter"),
    FieldSpec::level("skill_aptitude", "Aptitude"),
    FieldSpec::level("skill_reasoning", "Logical and Verbal Reasoning"),
    FieldSpec::level("concept_data_structures", "Data Structures"),
    FieldSpec::level("concept_dbms", "DBMS"),
    FieldSpec::level("concept_oops", "OOPS"),
    FieldSpec::level("concept_problem_solving", "Problem Solving"),
    FieldSpec::level("concept_networks", "Computer Networks"),
    FieldSpec::level("concept_os", "Operating Systems"),
    FieldSpec::level("concept_algos", "Algorithms"),
    FieldSpec::level("tool_git", "Git/GitHub"),
    FieldSpec::level("tool_linux", "Linux/Unix"),
    FieldSpec::level("tool_cloud", "Cloud Platforms"),
    FieldSpec::level("tool_comp_coding", "Competitive Coding"),
    FieldSpec::level("tool_hacker_rank", "HackerRank"),
    FieldSpec::level("tool_hacker_earth", "HackerEarth"),
    FieldSpec::level("communication_skills", "Communication"),
    FieldSpec::text("company_aim", "Target Company/Sector"),
    FieldSpec::text("target_package", "Target Package"),
    FieldSpec::area("certifications", "Certifications"),
    FieldSpec::area("awards", "Awards & Achievements"),
    FieldSpec::area("workshops", "Workshops Attended"),
    FieldSpec::area("internships", "Internships"),
    FieldSpec::area("hackathons_attended", "Hackathons Participated"),
    FieldSpec::area("extracurriculars", "Extracurricular Activities"),
    FieldSpec::area("club_participation", "Club Participation"),
    FieldSpec::area("future_path", "Future Career Path"),
    FieldSpec::area("strength", "Strengths"),
    FieldSpec::area("weakness", "Areas for Improvement"),
    FieldSpec::area("remarks", "Additional Remarks"),
];

/// The three profile forms, in step order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormId {
    Personal,
    Academic,
    Skills,
}

impl FormId {
    pub const ALL: [Self; 3] = [Self::Personal, Self::Academic, Self::Skills];

    /// `id` attribute of the rendered `<form>` element.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Personal => "personalForm",
            Self::Academic => "academicForm",
            Self::Skills => "skillsForm",
        }
    }

    /// Route path of this step's page.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Personal => "/profile/personal",
            Self::Academic => "/profile/academic",
            Self::Skills => "/profile/skills",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Details",
            Self::Academic => "Academic Details",
            Self::Skills => "Skills & Aspirations",
        }
    }

    #[must_use]
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Personal => PERSONAL_FIELDS,
            Self::Academic => ACADEMIC_FIELDS,
            Self::Skills => SKILLS_FIELDS,
        }
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Academic => Some(Self::Personal),
            Self::Skills => Some(Self::Academic),
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Academic),
            Self::Academic => Some(Self::Skills),
            Self::Skills => None,
        }
    }
}

/// Every catalog field across all forms, in step order.
pub fn all_fields() -> impl Iterator<Item = &'static FieldSpec> {
    FormId::ALL.into_iter().flat_map(FormId::fields)
}

/// Look up a field by name across all forms.
#[must_use]
pub fn find_field(name: &str) -> Option<&'static FieldSpec> {
    all_fields().find(|f| f.name == name)
}
