pub const TABLE: &str = "feedback_log";

pub const DDL: &str = r#"
CREATE TABLE IF NOT EXISTS feedback_log (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  use_case TEXT,
  user_prompt TEXT,
  model_a TEXT,
  model_b TEXT,
  model_a_response TEXT,
  model_b_response TEXT,
  feedback TEXT,
  feedback_motivation TEXT
);
"#;

pub const INSERT: &str = "INSERT INTO feedback_log(
    use_case, user_prompt, model_a, model_b,
    model_a_response, model_b_response, feedback, feedback_motivation
 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
