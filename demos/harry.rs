use otter_logic::{model_check, structures::sentence::Sentence};

/// Whether it rained, given where Harry went.
///
/// - If it did not rain, Harry visited Hagrid.
/// - Harry visited Hagrid or Dumbledore, but not both.
/// - Harry visited Dumbledore.
fn main() {
    let rain = Sentence::symbol("rain");
    let hagrid = Sentence::symbol("hagrid");
    let dumbledore = Sentence::symbol("dumbledore");

    let knowledge = Sentence::and([
        Sentence::implies(!rain.clone(), hagrid.clone()),
        hagrid.clone() | dumbledore.clone(),
        !(hagrid & dumbledore.clone()),
        dumbledore,
    ]);

    println!("{}", knowledge.formula());

    match model_check(&knowledge, &rain) {
        Ok(entailed) => println!("rain: {entailed}"),
        Err(e) => println!("Check error: {e:?}"),
    }
}
