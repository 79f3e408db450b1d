/// The two languages a query can be spoken in and a FAQ entry displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Yupik,
}

impl Language {
    pub const ALL: &[Language] = &[Language::English, Language::Yupik];
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Yupik => write!(f, "Yup'ik"),
        }
    }
}
