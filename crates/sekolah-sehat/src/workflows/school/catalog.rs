use super::domain::{QuestionId, QuestionSet, ServiceScope, StratificationTier, SurveyQuestion};

/// The built-in UKS stratification instrument: per scope and tier, the
/// named boolean indicators a school reports on.
#[derive(Debug)]
pub struct SurveyCatalog {
    sets: Vec<QuestionSet>,
}

impl SurveyCatalog {
    pub fn standard() -> Self {
        Self {
            sets: standard_question_sets(),
        }
    }

    pub fn question_set(
        &self,
        scope: ServiceScope,
        tier: StratificationTier,
    ) -> Option<&QuestionSet> {
        self.sets
            .iter()
            .find(|set| set.scope == scope && set.tier == tier)
    }

    pub fn question_sets(&self) -> &[QuestionSet] {
        &self.sets
    }
}

fn question_set(
    scope: ServiceScope,
    tier: StratificationTier,
    prefix: &str,
    indicators: &[&str],
) -> QuestionSet {
    let questions = indicators
        .iter()
        .enumerate()
        .map(|(index, indicator)| SurveyQuestion {
            id: QuestionId(format!("{prefix}-{}-{}", tier_code(tier), index + 1)),
            indicator: (*indicator).to_string(),
        })
        .collect();

    QuestionSet {
        scope,
        tier,
        questions,
    }
}

const fn tier_code(tier: StratificationTier) -> &'static str {
    match tier {
        StratificationTier::Minimal => "MIN",
        StratificationTier::Standar => "STD",
        StratificationTier::Optimal => "OPT",
        StratificationTier::Paripurna => "PAR",
    }
}

fn standard_question_sets() -> Vec<QuestionSet> {
    use ServiceScope::*;
    use StratificationTier::*;

    vec![
        question_set(
            HealthEducation,
            Minimal,
            "PEND",
            &[
                "Pendidikan jasmani dilaksanakan secara kurikuler",
                "Pendidikan kesehatan dilaksanakan secara kurikuler",
                "Guru membuat rencana pembelajaran pendidikan kesehatan",
            ],
        ),
        question_set(
            HealthEducation,
            Standar,
            "PEND",
            &[
                "Pendidikan kesehatan terintegrasi dengan mata pelajaran lain",
                "Sekolah melaksanakan kegiatan literasi kesehatan",
                "Sekolah melaksanakan pembinaan kader kesehatan sekolah",
            ],
        ),
        question_set(
            HealthEducation,
            Optimal,
            "PEND",
            &[
                "Sekolah melaksanakan peregangan di antara jam pelajaran",
                "Sekolah melaksanakan tes kebugaran jasmani peserta didik",
                "Pendidikan gizi dilaksanakan pada kegiatan ekstrakurikuler",
            ],
        ),
        question_set(
            HealthEducation,
            Paripurna,
            "PEND",
            &[
                "Sekolah menerapkan pendidikan keterampilan hidup sehat",
                "Peserta didik mengisi buku rapor kesehatanku secara rutin",
                "Orang tua terlibat dalam kegiatan pendidikan kesehatan",
            ],
        ),
        question_set(
            HealthService,
            Minimal,
            "PEL",
            &["Sekolah memfasilitasi puskesmas melaksanakan penjaringan kesehatan"],
        ),
        question_set(
            HealthService,
            Standar,
            "PEL",
            &["Sekolah melaksanakan pelayanan P3K dan P3P"],
        ),
        question_set(
            HealthService,
            Optimal,
            "PEL",
            &["Sekolah melaksanakan pemberian tablet tambah darah bagi remaja putri"],
        ),
        question_set(
            HealthService,
            Paripurna,
            "PEL",
            &["Sekolah menindaklanjuti hasil penjaringan dan pemeriksaan berkala"],
        ),
        question_set(
            SchoolEnvironment,
            Minimal,
            "LING",
            &["Sekolah memiliki sumber air bersih dan jamban yang layak"],
        ),
        question_set(
            SchoolEnvironment,
            Standar,
            "LING",
            &["Sekolah memiliki tempat cuci tangan dengan sabun dan air mengalir"],
        ),
        question_set(
            SchoolEnvironment,
            Optimal,
            "LING",
            &["Sekolah memiliki kantin sehat yang dibina secara berkala"],
        ),
        question_set(
            SchoolEnvironment,
            Paripurna,
            "LING",
            &["Kawasan sekolah bebas rokok, napza, dan kekerasan"],
        ),
        question_set(
            UksManagement,
            Minimal,
            "MAN",
            &[
                "Sekolah memiliki ruang UKS",
                "Sekolah membentuk tim pelaksana UKS",
            ],
        ),
        question_set(
            UksManagement,
            Standar,
            "MAN",
            &[
                "Sekolah menyusun rencana kegiatan UKS tahunan",
                "Tersedia dana untuk kegiatan UKS",
            ],
        ),
        question_set(
            UksManagement,
            Optimal,
            "MAN",
            &[
                "Kader kesehatan terlatih mencapai sepuluh persen peserta didik",
                "Sekolah menggunakan buku rapor kesehatan dalam pembinaan",
            ],
        ),
        question_set(
            UksManagement,
            Paripurna,
            "MAN",
            &["Sekolah melakukan pembinaan dan evaluasi UKS bersama puskesmas"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scope_and_tier_cell_is_configured() {
        let catalog = SurveyCatalog::standard();
        for scope in ServiceScope::ordered() {
            for tier in StratificationTier::ordered() {
                let set = catalog
                    .question_set(scope, tier)
                    .unwrap_or_else(|| panic!("{} {} missing", scope.key(), tier.label()));
                assert!(!set.questions.is_empty());
            }
        }
    }

    #[test]
    fn indicator_counts_match_the_instrument() {
        let catalog = SurveyCatalog::standard();
        let count = |scope: ServiceScope| -> usize {
            StratificationTier::ordered()
                .into_iter()
                .map(|tier| {
                    catalog
                        .question_set(scope, tier)
                        .map(|set| set.questions.len())
                        .unwrap_or(0)
                })
                .sum()
        };
        assert_eq!(count(ServiceScope::HealthEducation), 12);
        assert_eq!(count(ServiceScope::HealthService), 4);
        assert_eq!(count(ServiceScope::SchoolEnvironment), 4);
        assert_eq!(count(ServiceScope::UksManagement), 7);
    }

    #[test]
    fn question_ids_are_unique_across_the_instrument() {
        let catalog = SurveyCatalog::standard();
        let mut seen = std::collections::BTreeSet::new();
        for set in catalog.question_sets() {
            for question in &set.questions {
                assert!(seen.insert(question.id.clone()), "duplicate {:?}", question.id);
            }
        }
    }
}
