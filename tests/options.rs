use nlgeval::prelude::*;

#[test]
fn test_options_from_partial_json() {
  let options = EvalOptions::from_json(r#"{ "max_order": 3, "beta": -0.25 }"#).unwrap();
  assert_eq!(options.weights, vec![0.25; 4]);
  assert_eq!(options.max_order, 3);
  assert_eq!(options.beta, -0.25);
  assert_eq!(options.reference_chunk_size, 1000);
  assert_eq!(options.ngram_matching, NgramMatching::Substring);
}

#[test]
fn test_options_matching_mode_json() {
  let options = EvalOptions::from_json(r#"{ "ngram_matching": "token_boundary" }"#).unwrap();
  assert_eq!(options.ngram_matching, NgramMatching::TokenBoundary);
}

#[test]
fn test_options_round_trip() {
  let options = EvalOptions::default().weights(vec![0.5, 0.3, 0.2]).reference_chunk_size(250);
  let json = serde_json::to_string(&options).unwrap();
  assert_eq!(EvalOptions::from_json(&json).unwrap(), options);
}

#[test]
fn test_options_bad_json() {
  let err = EvalOptions::from_json("{ weights: ").unwrap_err();
  assert!(matches!(err, EvalError::OptionsFormat(_)));
}

#[test]
fn test_options_invalid_values() {
  let err = EvalOptions::from_json(r#"{ "reference_chunk_size": 0 }"#).unwrap_err();
  assert!(matches!(err, EvalError::InvalidOptions(_)));

  let err = EvalOptions::from_json(r#"{ "weights": [] }"#).unwrap_err();
  assert!(err.to_string().contains("at least one n-gram weight"));
}

#[test]
fn test_report_serializes() {
  let evaluator = Evaluator::builder()
    .options(EvalOptions::default().weights(vec![1.0]).max_order(1))
    .reference("the cat")
    .build()
    .unwrap();
  let report = evaluator.evaluate("the cat").unwrap();

  let value = serde_json::to_value(&report).unwrap();
  assert_eq!(value["scores"][0]["kind"], "Bleu");
  assert_eq!(value["scores"][0]["detail"]["type"], "Bleu");
  assert_eq!(value["scores"][1]["kind"], "Nist");
}
