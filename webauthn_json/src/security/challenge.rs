use rand::{thread_rng, Rng};

pub const CHALLENGE_LENGTH: usize = 32;

pub type Challenge = [u8; CHALLENGE_LENGTH];

pub fn generate_challenge() -> Challenge {
    let mut challenge = thread_rng();

    challenge.gen()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate() -> Result<(), Box<dyn std::error::Error>> {
        let test_challenge = generate_challenge();

        assert_eq!(test_challenge.len(), 32);
        assert_ne!(test_challenge, generate_challenge());

        Ok(())
    }
}
