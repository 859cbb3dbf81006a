pub mod case;
pub mod disease;
pub mod error;
pub mod filter;
pub mod options;
pub mod profile;
pub mod surveillance;

pub use case::{CaseStatus, DiseaseCase, Severity};
pub use disease::{Disease, MacroRegion};
pub use error::{Result, SurvError};
pub use filter::{CaseFilter, SurveillanceFilter};
pub use options::{CsvSource, GeneratorOptions, LoaderOptions, SURVEILLANCE_DATASET_URL};
pub use profile::{CASE_SYMPTOMS, COMMON_SYMPTOMS, DiseaseProfile, SymptomDefinition};
pub use surveillance::{
    AFFIRMATIVE, FlagDefinition, SURVEILLANCE_COMORBIDITIES, SURVEILLANCE_SYMPTOMS,
    SurveillanceCase, SurveillanceField,
};
