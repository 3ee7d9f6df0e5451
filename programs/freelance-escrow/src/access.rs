use anchor_lang::prelude::*;

use crate::state::Job;

/// Pure role predicates. The state machine turns a failed predicate into
/// the specific error for the operation at hand, never a generic
/// "unauthorized".

pub fn is_employer(caller: &Pubkey, job: &Job) -> bool {
    *caller == job.employer
}

/// A default (all-zero) employee slot means the job is vacant, so nobody
/// holds the employee role.
pub fn is_employee(caller: &Pubkey, job: &Job) -> bool {
    job.employee != Pubkey::default() && *caller == job.employee
}

/// Used when the employer names a specific address to approve or decline.
pub fn is_applicant(target: &Pubkey, job: &Job) -> bool {
    job.applicant != Pubkey::default() && *target == job.applicant
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_with(employer: Pubkey, applicant: Pubkey, employee: Pubkey) -> Job {
        Job {
            id: 0,
            employer,
            title: String::new(),
            description: String::new(),
            applicant,
            employee,
            pay_rate_usd: 0,
            pay_accepted: false,
            hired_at: 0,
            last_payment_at: 0,
            has_been_paid: false,
            bump: 255,
        }
    }

    #[test]
    fn employer_predicate_matches_only_the_creator() {
        let employer = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let job = job_with(employer, Pubkey::default(), Pubkey::default());

        assert!(is_employer(&employer, &job));
        assert!(!is_employer(&other, &job));
    }

    #[test]
    fn vacant_slots_never_authorize_the_default_key() {
        let employer = Pubkey::new_unique();
        let job = job_with(employer, Pubkey::default(), Pubkey::default());

        // Nobody is employee or applicant on a vacant job, not even the
        // zero key itself.
        assert!(!is_employee(&Pubkey::default(), &job));
        assert!(!is_applicant(&Pubkey::default(), &job));
    }

    #[test]
    fn employee_and_applicant_predicates_match_their_slots() {
        let employer = Pubkey::new_unique();
        let applicant = Pubkey::new_unique();
        let employee = Pubkey::new_unique();
        let job = job_with(employer, applicant, employee);

        assert!(is_applicant(&applicant, &job));
        assert!(!is_applicant(&employee, &job));
        assert!(is_employee(&employee, &job));
        assert!(!is_employee(&applicant, &job));
    }
}
