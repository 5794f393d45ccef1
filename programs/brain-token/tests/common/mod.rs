//! In-process instruction runner for the city programs.
//!
//! Instructions go through each program's Anchor `entry`, so account
//! deserialization, `#[account(..)]` constraints, handlers and `exit` all run
//! as they do on-chain. System and SPL Token instructions invoked by the
//! programs are applied directly to the passed accounts, and a failed
//! instruction rolls every account back like a failed transaction would.

#![allow(dead_code)]

use std::sync::Once;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    entrypoint::{ProgramResult, SUCCESS},
    instruction::Instruction,
    program_option::COption,
    program_pack::Pack,
    program_stubs::{set_syscall_stubs, SyscallStubs},
    system_program,
};
use anchor_lang::{AccountDeserialize, AccountSerialize, InstructionData};
use anchor_spl::token::spl_token::{
    self,
    error::TokenError,
    state::{Account as TokenState, AccountState, Mint as MintState},
};

pub const ONE_SOL: u64 = 1_000_000_000;
pub const NOW: i64 = 1_735_689_600;

pub type Entry =
    for<'info> fn(&Pubkey, &'info [AccountInfo<'info>], &[u8]) -> ProgramResult;

const CREATE_ACCOUNT: u32 = 0;
const TRANSFER: u32 = 2;
const MINT_TO: u8 = 7;
const BURN: u8 = 8;

/// Programs allowed to sign for their PDAs through `invoke_signed`.
const PDA_SIGNERS: [Pubkey; 4] = [
    brain_token::ID,
    city_registry::ID,
    task_marketplace::ID,
    staking_vault::ID,
];

pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub is_signer: bool,
    pub is_writable: bool,
    pub executable: bool,
}

impl TestAccount {
    pub fn new(key: Pubkey) -> Self {
        Self {
            key,
            owner: system_program::ID,
            lamports: 0,
            data: Vec::new(),
            is_signer: false,
            is_writable: false,
            executable: false,
        }
    }

    /// A funded system wallet that signs the instruction.
    pub fn wallet() -> Self {
        let mut account = Self::new(Pubkey::new_unique()).signer().writable();
        account.lamports = 100 * ONE_SOL;
        account
    }

    /// An address the program is expected to create, with room for `space`
    /// bytes once it does.
    pub fn uncreated(key: Pubkey, space: usize) -> Self {
        let mut account = Self::new(key).writable();
        account.data = vec![0; space];
        account
    }

    pub fn program(id: Pubkey) -> Self {
        let mut account = Self::new(id);
        account.executable = true;
        account
    }

    pub fn mint(key: Pubkey, authority: Pubkey, supply: u64, decimals: u8) -> Self {
        let mut account = Self::new(key).writable();
        account.owner = spl_token::ID;
        account.lamports = Rent::default().minimum_balance(MintState::LEN);
        account.data = vec![0; MintState::LEN];
        let state = MintState {
            mint_authority: COption::Some(authority),
            supply,
            decimals,
            is_initialized: true,
            freeze_authority: COption::None,
        };
        MintState::pack(state, &mut account.data).unwrap();
        account
    }

    pub fn token_account(mint: Pubkey, owner: Pubkey, amount: u64) -> Self {
        let mut account = Self::new(Pubkey::new_unique()).writable();
        account.owner = spl_token::ID;
        account.lamports = Rent::default().minimum_balance(TokenState::LEN);
        account.data = vec![0; TokenState::LEN];
        let state = TokenState {
            mint,
            owner,
            amount,
            delegate: COption::None,
            state: AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        TokenState::pack(state, &mut account.data).unwrap();
        account
    }

    /// An already-created program account holding `state`.
    pub fn with_state<T: AccountSerialize>(key: Pubkey, program: Pubkey, space: usize, state: &T) -> Self {
        let mut account = Self::new(key).writable();
        account.owner = program;
        account.lamports = Rent::default().minimum_balance(space);
        state.try_serialize(&mut account.data).unwrap();
        account.data.resize(space, 0);
        account
    }

    pub fn signer(mut self) -> Self {
        self.is_signer = true;
        self
    }

    pub fn writable(mut self) -> Self {
        self.is_writable = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.is_writable = false;
        self
    }

    pub fn load<T: AccountDeserialize>(&self) -> T {
        T::try_deserialize(&mut self.data.as_slice()).unwrap()
    }

    pub fn token_balance(&self) -> u64 {
        TokenState::unpack(&self.data).unwrap().amount
    }

    pub fn mint_supply(&self) -> u64 {
        MintState::unpack(&self.data).unwrap().supply
    }

    pub fn is_created(&self) -> bool {
        self.lamports > 0
    }

    fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            self.is_signer,
            self.is_writable,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            self.executable,
            0,
        )
    }
}

/// Runs one instruction against `accounts`, in the order the instruction's
/// `#[derive(Accounts)]` struct lists them.
pub fn process<I: InstructionData>(
    entry: Entry,
    program_id: &Pubkey,
    ix: I,
    accounts: &mut [&mut TestAccount],
) -> ProgramResult {
    install_stubs();
    let data = ix.data();
    let snapshot: Vec<(Pubkey, u64, Vec<u8>)> = accounts
        .iter()
        .map(|account| (account.owner, account.lamports, account.data.clone()))
        .collect();

    let result = {
        let infos: Vec<AccountInfo> = accounts.iter_mut().map(|account| account.info()).collect();
        entry(program_id, &infos, &data)
    };

    if result.is_err() {
        for (account, (owner, lamports, data)) in accounts.iter_mut().zip(snapshot) {
            account.owner = owner;
            account.lamports = lamports;
            account.data = data;
        }
    }
    result
}

/// The error an instruction surfaces for `err`.
pub fn failure(err: impl Into<anchor_lang::error::Error>) -> ProgramResult {
    Err(err.into().into())
}

fn install_stubs() {
    static STUBS: Once = Once::new();
    STUBS.call_once(|| {
        set_syscall_stubs(Box::new(CityRuntime));
    });
}

struct CityRuntime;

impl SyscallStubs for CityRuntime {
    fn sol_get_rent_sysvar(&self, var_addr: *mut u8) -> u64 {
        unsafe { *(var_addr as *mut Rent) = Rent::default() };
        SUCCESS
    }

    fn sol_get_clock_sysvar(&self, var_addr: *mut u8) -> u64 {
        let clock = Clock {
            unix_timestamp: NOW,
            ..Clock::default()
        };
        unsafe { *(var_addr as *mut Clock) = clock };
        SUCCESS
    }

    fn sol_invoke_signed(
        &self,
        instruction: &Instruction,
        account_infos: &[AccountInfo],
        signers_seeds: &[&[&[u8]]],
    ) -> ProgramResult {
        let signed = |key: &Pubkey| -> ProgramResult {
            let info = find(account_infos, key)?;
            let by_seeds = signers_seeds.iter().any(|seeds| {
                PDA_SIGNERS
                    .iter()
                    .any(|program| Pubkey::create_program_address(seeds, program) == Ok(*key))
            });
            if info.is_signer || by_seeds {
                Ok(())
            } else {
                Err(ProgramError::MissingRequiredSignature)
            }
        };

        if instruction.program_id == system_program::ID {
            system_instruction(instruction, account_infos, signed)
        } else if instruction.program_id == spl_token::ID {
            token_instruction(instruction, account_infos, signed)
        } else {
            Err(ProgramError::IncorrectProgramId)
        }
    }
}

fn system_instruction(
    instruction: &Instruction,
    infos: &[AccountInfo],
    signed: impl Fn(&Pubkey) -> ProgramResult,
) -> ProgramResult {
    let data = &instruction.data;
    let tag = u32::from_le_bytes(slice(data, 0)?);
    let lamports = u64::from_le_bytes(slice(data, 4)?);
    let from_key = &meta(instruction, 0)?;
    let to_key = &meta(instruction, 1)?;
    signed(from_key)?;
    let from = find(infos, from_key)?;
    let to = find(infos, to_key)?;

    match tag {
        CREATE_ACCOUNT => {
            signed(to_key)?;
            let space = u64::from_le_bytes(slice(data, 12)?);
            let owner = Pubkey::new_from_array(slice(data, 20)?);
            if to.lamports() != 0 || to.owner != &system_program::ID {
                return Err(ProgramError::AccountAlreadyInitialized);
            }
            if to.data_len() as u64 != space {
                return Err(ProgramError::InvalidAccountData);
            }
            move_lamports(from, to, lamports)?;
            to.assign(&owner);
            Ok(())
        }
        TRANSFER => {
            if from.owner != &system_program::ID || !from.data_is_empty() {
                return Err(ProgramError::InvalidAccountData);
            }
            move_lamports(from, to, lamports)?;
            if !Rent::default().is_exempt(to.lamports(), to.data_len()) {
                return Err(ProgramError::InsufficientFunds);
            }
            Ok(())
        }
        _ => Err(ProgramError::InvalidInstructionData),
    }
}

fn token_instruction(
    instruction: &Instruction,
    infos: &[AccountInfo],
    signed: impl Fn(&Pubkey) -> ProgramResult,
) -> ProgramResult {
    let tag = *instruction
        .data
        .first()
        .ok_or(ProgramError::InvalidInstructionData)?;
    let amount = u64::from_le_bytes(slice(&instruction.data, 1)?);

    match tag {
        MINT_TO => {
            let mint_info = find(infos, &meta(instruction, 0)?)?;
            let account_info = find(infos, &meta(instruction, 1)?)?;
            let authority = meta(instruction, 2)?;
            let mut mint = MintState::unpack(&mint_info.try_borrow_data()?)?;
            let mut account = TokenState::unpack(&account_info.try_borrow_data()?)?;
            if mint.mint_authority != COption::Some(authority) {
                return Err(TokenError::OwnerMismatch.into());
            }
            signed(&authority)?;
            if account.mint != *mint_info.key {
                return Err(TokenError::MintMismatch.into());
            }
            mint.supply = mint.supply.checked_add(amount).ok_or(TokenError::Overflow)?;
            account.amount = account.amount.checked_add(amount).ok_or(TokenError::Overflow)?;
            MintState::pack(mint, &mut mint_info.try_borrow_mut_data()?)?;
            TokenState::pack(account, &mut account_info.try_borrow_mut_data()?)?;
            Ok(())
        }
        BURN => {
            let account_info = find(infos, &meta(instruction, 0)?)?;
            let mint_info = find(infos, &meta(instruction, 1)?)?;
            let authority = meta(instruction, 2)?;
            let mut account = TokenState::unpack(&account_info.try_borrow_data()?)?;
            let mut mint = MintState::unpack(&mint_info.try_borrow_data()?)?;
            if account.mint != *mint_info.key {
                return Err(TokenError::MintMismatch.into());
            }
            if account.owner != authority {
                return Err(TokenError::OwnerMismatch.into());
            }
            signed(&authority)?;
            account.amount = account
                .amount
                .checked_sub(amount)
                .ok_or(TokenError::InsufficientFunds)?;
            mint.supply = mint.supply.checked_sub(amount).ok_or(TokenError::Overflow)?;
            TokenState::pack(account, &mut account_info.try_borrow_mut_data()?)?;
            MintState::pack(mint, &mut mint_info.try_borrow_mut_data()?)?;
            Ok(())
        }
        _ => Err(ProgramError::InvalidInstructionData),
    }
}

fn move_lamports(from: &AccountInfo, to: &AccountInfo, lamports: u64) -> ProgramResult {
    let remaining = from
        .lamports()
        .checked_sub(lamports)
        .ok_or(ProgramError::InsufficientFunds)?;
    let credited = to
        .lamports()
        .checked_add(lamports)
        .ok_or(ProgramError::ArithmeticOverflow)?;
    **from.try_borrow_mut_lamports()? = remaining;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}

fn find<'a, 'info>(infos: &'a [AccountInfo<'info>], key: &Pubkey) -> std::result::Result<&'a AccountInfo<'info>, ProgramError> {
    infos
        .iter()
        .find(|info| info.key == key)
        .ok_or(ProgramError::NotEnoughAccountKeys)
}

fn meta(instruction: &Instruction, index: usize) -> std::result::Result<Pubkey, ProgramError> {
    instruction
        .accounts
        .get(index)
        .map(|meta| meta.pubkey)
        .ok_or(ProgramError::NotEnoughAccountKeys)
}

fn slice<const N: usize>(data: &[u8], offset: usize) -> std::result::Result<[u8; N], ProgramError> {
    data.get(offset..offset + N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(ProgramError::InvalidInstructionData)
}
