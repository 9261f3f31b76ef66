//! Extraction-prompt synthesis
//!
//! The prompt is assembled in a fixed order: mission preamble, a
//! type-specific block, an optional complexity block, an optional
//! reinforcement block when confidence is weak, the output schema, the
//! per-type validation directive, and finally the document itself,
//! verbatim. The built prompt always ends with the original text.

use vitae_domain::{Classification, Complexity, CvType};

/// Global confidence below which the reinforcement block is added
pub const REINFORCEMENT_THRESHOLD: f64 = 0.7;

const MISSION: &str = "\
Tu es un expert en extraction de données de CV. Ta mission est de \
relever TOUTES les expériences professionnelles et informations \
personnelles présentes dans le document.

Règles impératives :
- Extraction exhaustive : chaque expérience compte, même courte ou ancienne.
- Ne jamais inventer : si une information est absente, laisser le champ vide.
- Conserver les dates exactement comme écrites dans le document.
- Une ligne de type \"date : poste - société\" est toujours une expérience distincte.";

const TYPE_ASSISTANT: &str = "\
Profil assistanat / secrétariat : les expériences sont souvent \
nombreuses et courtes (intérim, remplacements). Relever chaque mission, \
y compris les remplacements de quelques mois. Les intitulés varient \
(assistante, secrétaire, office manager) mais chacun compte.";

const TYPE_TECH: &str = "\
Profil technique / ingénierie : relever les technologies et outils dans \
les descriptions de poste et les reporter aussi dans les compétences et \
logiciels. Les missions freelance et les projets longs comptent comme \
des expériences.";

const TYPE_LUXE: &str = "\
Profil luxe / mode : les maisons et boutiques s'enchaînent vite dans ce \
secteur ; chaque maison, corner ou boutique est une expérience \
distincte. Relever les noms de marques exacts et les saisons ou \
collections mentionnées.";

const TYPE_COMMERCIAL: &str = "\
Profil commercial / vente : relever les secteurs, portefeuilles clients \
et zones géographiques. Les chiffres (objectifs, CA) appartiennent à la \
description de l'expérience concernée.";

const TYPE_GENERAL: &str = "\
Profil général : parcourir tout le document sans présumer du métier. \
Toute période datée associée à une activité est une expérience.";

const COMPLEXITY_HIGH: &str = "\
Document dense : le CV contient beaucoup de signal (nombreuses dates, \
sections, entreprises). Parcourir chaque section jusqu'au bout ; ne pas \
s'arrêter aux expériences les plus récentes.";

const COMPLEXITY_MEDIUM: &str = "\
Document de densité moyenne : vérifier les fins de page et les sections \
secondaires, des expériences peuvent s'y trouver.";

const REINFORCED: &str = "\
Analyse renforcée : la structure du document est peu marquée. Lire \
ligne par ligne et considérer toute mention d'entreprise, de date ou de \
poste comme une expérience potentielle.";

const SCHEMA: &str = r#"Réponds UNIQUEMENT avec un objet JSON de cette forme exacte :
{
  "personal_info": { "name": "", "email": "", "phone": "" },
  "work_experience": [
    { "title": "", "company": "", "start_date": "", "end_date": "", "description": "" }
  ],
  "skills": [],
  "education": [ { "degree": "", "institution": "", "year": "" } ],
  "languages": [ { "language": "", "level": "" } ],
  "software": []
}"#;

/// Builds the extraction prompt for one classified document
pub struct PromptBuilder<'a> {
    classification: &'a Classification,
    text: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a builder for one document
    pub fn new(classification: &'a Classification, text: &'a str) -> Self {
        Self {
            classification,
            text,
        }
    }

    /// Assemble the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Mission and rules
        prompt.push_str(MISSION);
        prompt.push_str("\n\n");

        // 2. Type-specific guidance
        prompt.push_str(self.type_block());
        prompt.push_str("\n\n");

        // 3. Complexity guidance (omitted for Low)
        if let Some(block) = self.complexity_block() {
            prompt.push_str(block);
            prompt.push_str("\n\n");
        }

        // 4. Reinforcement when the signals are weak
        if self.classification.confidence < REINFORCEMENT_THRESHOLD {
            prompt.push_str(REINFORCED);
            prompt.push_str("\n\n");
        }

        // 5. Output schema
        prompt.push_str(SCHEMA);
        prompt.push_str("\n\n");

        // 6. Validation directive with the per-type experience floor
        prompt.push_str(&format!(
            "Validation : un CV de ce type contient normalement au moins {} \
expérience(s). Si tu en trouves moins, relis le document avant de répondre.",
            self.classification.cv_type.experience_floor()
        ));
        prompt.push_str("\n\n");

        // 7. The document, verbatim, as the final suffix
        prompt.push_str("CV À ANALYSER :\n");
        prompt.push_str(self.text);

        prompt
    }

    fn type_block(&self) -> &'static str {
        match self.classification.cv_type {
            CvType::Assistant => TYPE_ASSISTANT,
            CvType::Tech => TYPE_TECH,
            CvType::LuxeMode => TYPE_LUXE,
            CvType::Commercial => TYPE_COMMERCIAL,
            CvType::General => TYPE_GENERAL,
        }
    }

    fn complexity_block(&self) -> Option<&'static str> {
        match self.classification.complexity {
            Complexity::High => Some(COMPLEXITY_HIGH),
            Complexity::Medium => Some(COMPLEXITY_MEDIUM),
            Complexity::Low => None,
        }
    }
}
