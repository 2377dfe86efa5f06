//! Static term lists used for keyword matching. Read-only, process-wide.

/// Clients frequently seen in consultant résumés, in their canonical spelling.
pub const KNOWN_CLIENTS: &[&str] = &[
    "BNP Paribas",
    "Société Générale",
    "Crédit Agricole",
    "Crédit Mutuel",
    "LCL",
    "Natixis",
    "BPCE",
    "La Banque Postale",
    "Caisse d'Epargne",
    "Banque Populaire",
    "HSBC",
    "Amundi",
    "Euronext",
    "AXA",
    "Allianz",
    "Generali",
    "CNP Assurances",
    "Groupama",
    "Covéa",
    "MAIF",
    "MACIF",
    "Orange",
    "SFR",
    "Bouygues Telecom",
    "Airbus",
    "Thales",
    "Safran",
    "Dassault Systèmes",
    "Alstom",
    "Capgemini",
    "Sopra Steria",
    "Atos",
    "Accenture",
    "EDF",
    "Engie",
    "TotalEnergies",
    "Renault",
    "Stellantis",
    "Michelin",
    "L'Oréal",
    "LVMH",
    "Carrefour",
    "Auchan",
    "Decathlon",
    "SNCF",
    "RATP",
    "Air France",
    "La Poste",
    "Sanofi",
    "Danone",
    "Veolia",
    "Vinci",
    "Schneider Electric",
    "Saint-Gobain",
    "Ubisoft",
];

pub const PROGRAMMING_LANGUAGES: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "C#",
    "C++",
    "Golang",
    "Rust",
    "PHP",
    "Ruby",
    "Scala",
    "Kotlin",
    "Swift",
    "SQL",
    "PL/SQL",
    "COBOL",
    "Bash",
    "PowerShell",
    "VBA",
    "HTML",
    "CSS",
];

pub const FRAMEWORKS: &[&str] = &[
    "Spring Boot",
    "Spring",
    "Hibernate",
    "Angular",
    "React",
    "Vue.js",
    "Node.js",
    "Django",
    "Flask",
    "FastAPI",
    ".NET",
    "Symfony",
    "Laravel",
    "Spark",
    "Hadoop",
    "Kafka",
    "TensorFlow",
    "PyTorch",
    "Pandas",
];

pub const TOOLS: &[&str] = &[
    "Docker",
    "Kubernetes",
    "OpenShift",
    "Jenkins",
    "Git",
    "GitLab",
    "GitHub",
    "Ansible",
    "Terraform",
    "AWS",
    "Azure",
    "GCP",
    "Jira",
    "Confluence",
    "Oracle",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Elasticsearch",
    "Redis",
    "Linux",
    "SAP",
    "Power BI",
    "Tableau",
    "Salesforce",
    "SonarQube",
];

/// Tools named after common French words. They match only in their canonical
/// spelling and never when followed by `de`/`des`/`du`.
pub const AMBIGUOUS_TERMS: &[&str] = &["Tableau"];

/// Methodologies and business domains, matched as lowercase substrings.
pub const FUNCTIONAL_SKILLS: &[&str] = &[
    "Agile",
    "Scrum",
    "Kanban",
    "SAFe",
    "DevOps",
    "ITIL",
    "Gestion de projet",
    "Pilotage",
    "AMOA",
    "Recette",
    "Conduite du changement",
    "Analyse fonctionnelle",
    "Spécifications",
    "Architecture",
    "Urbanisation",
    "Cybersécurité",
    "RGPD",
    "Banque",
    "Finance",
    "Assurance",
    "Télécom",
    "Retail",
    "Industrie",
    "Énergie",
    "Santé",
];

/// Section headers that open the professional-experience part of a résumé,
/// in priority order.
pub const EXPERIENCE_HEADERS: &[&str] = &[
    "expérience professionnelle",
    "expériences professionnelles",
    "experience professionnelle",
    "experiences professionnelles",
    "parcours professionnel",
    "historique professionnel",
    "expériences",
    "expérience",
    "experiences",
    "références",
    "réalisations",
    "missions",
    "projets",
    "carrière",
    "emplois",
];

/// Nouns that make a sentence look like a mission description.
pub const MISSION_KEYWORDS: &[&str] = &[
    "mission",
    "projet",
    "client",
    "développement",
    "conception",
    "mise en place",
    "migration",
    "refonte",
    "architecture",
    "déploiement",
    "maintenance",
    "pilotage",
    "gestion",
    "analyse",
    "équipe",
];

/// Action verbs (past participles) typical of mission bullet points.
pub const ACTION_VERBS: &[&str] = &[
    "développé",
    "conçu",
    "réalisé",
    "participé",
    "piloté",
    "mis en place",
    "géré",
    "assuré",
    "encadré",
    "déployé",
    "migré",
    "optimisé",
    "implémenté",
    "rédigé",
    "animé",
    "automatisé",
];

/// Look up the canonical spelling of a known client, case-insensitively.
pub fn canonical_client(name: &str) -> Option<&'static str> {
    let needle = name.trim().to_lowercase();
    KNOWN_CLIENTS
        .iter()
        .copied()
        .find(|client| client.to_lowercase() == needle)
}
