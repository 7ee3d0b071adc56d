use rand::{thread_rng, Rng};

pub const USER_HANDLE_LENGTH: usize = 32;

pub type UserHandle = Vec<u8>;

pub fn generate_user_handle() -> UserHandle {
    let mut user_handle = vec![0u8; USER_HANDLE_LENGTH];

    thread_rng().fill(user_handle.as_mut_slice());

    user_handle
}
