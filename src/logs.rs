use ic_canister_log::declare_log_buffer;

// High-priority messages: pools created, positions minted, pairs created.
declare_log_buffer!(name = INFO, capacity = 1000);

// Collaborator failures and receipt decode failures.
declare_log_buffer!(name = DEBUG, capacity = 1000);
