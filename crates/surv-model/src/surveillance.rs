//! Surveillance notification records.
//!
//! The CSV feed carries one row per notification with Portuguese column
//! headers. Every field is an optional string: absence means "unknown",
//! never "no". Binary flags are affirmative only when equal to
//! [`AFFIRMATIVE`].

use serde::{Deserialize, Serialize};

/// Value used by the notification form for "yes".
pub const AFFIRMATIVE: &str = "Sim";

macro_rules! surveillance_fields {
    ($( $variant:ident => $field:ident, $key:literal, $header:literal; )*) => {
        /// A normalized surveillance field together with its source header.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum SurveillanceField {
            $( $variant, )*
        }

        impl SurveillanceField {
            /// All fields in source-form order.
            pub const ALL: &'static [SurveillanceField] = &[
                $( SurveillanceField::$variant, )*
            ];

            /// Normalized camelCase key (`ufNotificacao`).
            pub fn key(&self) -> &'static str {
                match self {
                    $( SurveillanceField::$variant => $key, )*
                }
            }

            /// Column header used by the source CSV (`UF da Notificação`).
            pub fn header(&self) -> &'static str {
                match self {
                    $( SurveillanceField::$variant => $header, )*
                }
            }

            /// Resolves a source header. The match is exact after whitespace
            /// trimming; unknown headers return `None`.
            pub fn from_header(header: &str) -> Option<Self> {
                match header.trim() {
                    $( $header => Some(SurveillanceField::$variant), )*
                    _ => None,
                }
            }
        }

        /// One surveillance notification.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct SurveillanceCase {
            /// Identifier derived from the source and record number.
            pub record_id: String,
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )*
        }

        impl SurveillanceCase {
            pub fn get(&self, field: SurveillanceField) -> Option<&str> {
                match field {
                    $( SurveillanceField::$variant => self.$field.as_deref(), )*
                }
            }

            pub fn set(&mut self, field: SurveillanceField, value: Option<String>) {
                match field {
                    $( SurveillanceField::$variant => self.$field = value, )*
                }
            }
        }
    };
}

surveillance_fields! {
    TipoNotificacao => tipo_notificacao, "tipoNotificacao", "Tipo de Notificação";
    Agravo => agravo, "agravo", "Agravo";
    DataNotificacao => data_notificacao, "dataNotificacao", "Data de Notificação";
    UfNotificacao => uf_notificacao, "ufNotificacao", "UF da Notificação";
    MunicipioNotificacao => municipio_notificacao, "municipioNotificacao", "Município da Notificação";
    UnidadeSaude => unidade_saude, "unidadeSaude", "Unidade de Saúde";
    DataPrimeirosSintomas => data_primeiros_sintomas, "dataPrimeirosSintomas", "Data dos Primeiros Sintomas";
    AnoNascimento => ano_nascimento, "anoNascimento", "Ano de Nascimento";
    Sexo => sexo, "sexo", "Sexo";
    Gestante => gestante, "gestante", "Gestante";
    Raca => raca, "raca", "Raça";
    UfResidencia => uf_residencia, "ufResidencia", "UF de Residência";
    MunicipioResidencia => municipio_residencia, "municipioResidencia", "Município de Residência";
    PaisResidencia => pais_residencia, "paisResidencia", "País de Residência";
    DataInvestigacao => data_investigacao, "dataInvestigacao", "Data da Investigação";
    Febre => febre, "febre", "Febre";
    Mialgia => mialgia, "mialgia", "Mialgia";
    Cefaleia => cefaleia, "cefaleia", "Cefaleia";
    Exantema => exantema, "exantema", "Exantema";
    Vomito => vomito, "vomito", "Vômito";
    Nausea => nausea, "nausea", "Náusea";
    DorCostas => dor_costas, "dorCostas", "Dor nas Costas";
    Conjuntivite => conjuntivite, "conjuntivite", "Conjuntivite";
    Artrite => artrite, "artrite", "Artrite";
    Artralgia => artralgia, "artralgia", "Artralgia";
    Petequias => petequias, "petequias", "Petéquias";
    Leucopenia => leucopenia, "leucopenia", "Leucopenia";
    TesteLaco => teste_laco, "testeLaco", "Teste do Laço";
    DorRetroOrbital => dor_retro_orbital, "dorRetroOrbital", "Dor Retro-Orbital";
    Diabetes => diabetes, "diabetes", "Diabetes";
    DoencaHematologica => doenca_hematologica, "doencaHematologica", "Doença Hematológica";
    Hepatopatia => hepatopatia, "hepatopatia", "Hepatopatia";
    DoencaRenal => doenca_renal, "doencaRenal", "Doença Renal";
    Hipertensao => hipertensao, "hipertensao", "Hipertensão";
    UlceraPeptica => ulcera_peptica, "ulceraPeptica", "Úlcera Péptica";
    DoencaAutoimune => doenca_autoimune, "doencaAutoimune", "Doença Autoimune";
    Hospitalizacao => hospitalizacao, "hospitalizacao", "Hospitalização";
    DataInternacao => data_internacao, "dataInternacao", "Data da Internação";
    DataObito => data_obito, "dataObito", "Data do Óbito";
}

impl SurveillanceCase {
    /// True when the flag field holds the affirmative sentinel.
    pub fn is_affirmative(&self, field: SurveillanceField) -> bool {
        self.get(field) == Some(AFFIRMATIVE)
    }

    pub fn is_hospitalized(&self) -> bool {
        self.is_affirmative(SurveillanceField::Hospitalizacao)
    }

    /// A death date is recorded.
    pub fn is_death(&self) -> bool {
        self.data_obito
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }
}

/// A binary flag shown on the symptom or comorbidity charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDefinition {
    pub field: SurveillanceField,
    pub label: &'static str,
    pub color: &'static str,
}

const fn flag(
    field: SurveillanceField,
    label: &'static str,
    color: &'static str,
) -> FlagDefinition {
    FlagDefinition {
        field,
        label,
        color,
    }
}

/// Symptom flags tracked by the symptom-frequency chart.
pub const SURVEILLANCE_SYMPTOMS: [FlagDefinition; 12] = [
    flag(SurveillanceField::Febre, "Febre", "#ef4444"),
    flag(SurveillanceField::Mialgia, "Mialgia", "#f97316"),
    flag(SurveillanceField::Cefaleia, "Cefaleia", "#f59e0b"),
    flag(SurveillanceField::Exantema, "Exantema", "#84cc16"),
    flag(SurveillanceField::Vomito, "Vômito", "#10b981"),
    flag(SurveillanceField::Nausea, "Náusea", "#06b6d4"),
    flag(SurveillanceField::DorCostas, "Dor nas Costas", "#0ea5e9"),
    flag(SurveillanceField::Conjuntivite, "Conjuntivite", "#3b82f6"),
    flag(SurveillanceField::Artrite, "Artrite", "#6366f1"),
    flag(SurveillanceField::Artralgia, "Artralgia", "#8b5cf6"),
    flag(SurveillanceField::Petequias, "Petéquias", "#a855f7"),
    flag(SurveillanceField::DorRetroOrbital, "Dor Retro-Orbital", "#ec4899"),
];

/// Comorbidity flags.
pub const SURVEILLANCE_COMORBIDITIES: [FlagDefinition; 7] = [
    flag(SurveillanceField::Diabetes, "Diabetes", "#94a3b8"),
    flag(SurveillanceField::DoencaHematologica, "Doença Hematológica", "#94a3b8"),
    flag(SurveillanceField::Hepatopatia, "Hepatopatia", "#94a3b8"),
    flag(SurveillanceField::DoencaRenal, "Doença Renal", "#94a3b8"),
    flag(SurveillanceField::Hipertensao, "Hipertensão", "#94a3b8"),
    flag(SurveillanceField::UlceraPeptica, "Úlcera Péptica", "#94a3b8"),
    flag(SurveillanceField::DoencaAutoimune, "Doença Autoimune", "#94a3b8"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_resolves_from_its_header() {
        assert_eq!(SurveillanceField::ALL.len(), 39);
        for field in SurveillanceField::ALL {
            assert_eq!(SurveillanceField::from_header(field.header()), Some(*field));
        }
        assert_eq!(SurveillanceField::from_header("Coluna Extra"), None);
    }

    #[test]
    fn get_and_set_address_the_same_slot() {
        let mut case = SurveillanceCase::default();
        case.set(SurveillanceField::UfNotificacao, Some("SP".to_string()));
        assert_eq!(case.uf_notificacao.as_deref(), Some("SP"));
        assert_eq!(case.get(SurveillanceField::UfNotificacao), Some("SP"));
        assert_eq!(case.get(SurveillanceField::Febre), None);
    }

    #[test]
    fn flags_require_exact_sentinel() {
        let case = SurveillanceCase {
            febre: Some("Sim".to_string()),
            mialgia: Some("sim".to_string()),
            hospitalizacao: Some("Não".to_string()),
            ..SurveillanceCase::default()
        };
        assert!(case.is_affirmative(SurveillanceField::Febre));
        assert!(!case.is_affirmative(SurveillanceField::Mialgia));
        assert!(!case.is_hospitalized());
    }
}
