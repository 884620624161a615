use isd_birthday::isd::attack::Attack;
use isd_birthday::isd::{Birthday, params::SdExperimentParams};

fn main() {
    let params = SdExperimentParams::with_numeric_seed(20, 0);
    let instance = params.generate().unwrap();
    let attack = Birthday::default().with_seed(7);
    println!("Using attack: {}", attack.name());
    println!("n = {}, n-k = {}, w = {}", instance.n(), instance.redundancy(), instance.w());
    match attack.decode_all(&instance) {
        Ok(solutions) => {
            println!("Found {} unique solutions", solutions.len());
            for e in &solutions {
                println!("{} support={:?}", e, e.ones_indices());
                println!("H·e == s: {}", instance.syndrome_of(e) == *instance.s());
            }
        }
        Err(e) => {
            println!("Error during attack: {}", e);
        }
    }
    match attack.solve(&instance) {
        Ok(Some(e)) => println!("First match: {}", e),
        Ok(None) => println!("No solution found within the attempt cap."),
        Err(e) => println!("Error during attack: {}", e),
    }
}
