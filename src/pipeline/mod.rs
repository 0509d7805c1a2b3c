//! Training and prediction pipeline
//!
//! Flow: load tables, validate required columns, one-hot encode, split,
//! fit the forest, evaluate the holdout, then score the input and write
//! the predictions out.

pub mod align;
pub mod columns;
pub mod encode;
pub mod error;
pub mod eval;
pub mod forest;
pub mod loader;
pub mod session;
pub mod split;
pub(crate) mod tree;
pub mod validate;
pub mod writer;

pub use align::{align_to_schema, Aligned};
pub use columns::{
    default_training_path, CLASS_NAMES, DEFAULT_HOLDOUT, DEFAULT_SEED, ID_COLUMN, LABEL_COLUMN,
    PREDICTION_COLUMN, PREDICTION_LABEL_COLUMN,
};
pub use encode::{encode_features, EncodedTable};
pub use error::PipelineError;
pub use eval::{evaluate, ClassMetrics, ConfusionMatrix, EvaluationReport};
pub use forest::{ForestConfig, RandomForest};
pub use loader::load_table;
pub use session::{train_session, Scored, TrainedSession};
pub use split::holdout_split;
pub use validate::require_columns;
pub use writer::save_predictions;
