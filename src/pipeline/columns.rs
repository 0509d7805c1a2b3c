//! Training-table contract: fixed column names and run constants
//!
//! The training table must carry the identifier and label columns below;
//! every other column is treated as a feature. The prediction table must
//! carry exactly the feature set derived from training.

use std::path::PathBuf;

/// Identifier column, excluded from the feature set before encoding.
pub const ID_COLUMN: &str = "Employee_ID";

/// Binary label column, excluded from the feature set before encoding.
pub const LABEL_COLUMN: &str = "Attrition";

/// Raw predicted class (0/1) appended to the scored table.
pub const PREDICTION_COLUMN: &str = "Prediction";

/// Human-readable predicted label ("Yes"/"No") appended to the scored table.
pub const PREDICTION_LABEL_COLUMN: &str = "Prediction_Label";

/// Display names for the two classes, indexed by class id.
pub const CLASS_NAMES: [&str; 2] = ["No", "Yes"];

/// Fraction of training rows held out for validation.
pub const DEFAULT_HOLDOUT: f64 = 0.3;

/// Partition and forest seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Default location of the fixed training dataset.
pub fn default_training_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("employee_attrition_dataset.csv")
}
