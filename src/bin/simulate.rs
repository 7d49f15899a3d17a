//! Negotiation Simulator
//!
//! Two parties with random linear-additive profiles alternate offers over a
//! synthetic domain. Halfway through, each votes on the other's latest
//! proposal.
//!
//! Options: --rounds, --issues, --values, --seed

use clap::Parser;
use colored::*;
use negotiator::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;

#[derive(Parser)]
#[command(author, version, about = "Simulate a bilateral negotiation", long_about = None)]
struct Args {
    /// Turns granted to each party
    #[arg(long, default_value_t = 100)]
    rounds: Round,
    /// Issues in the synthetic domain
    #[arg(long, default_value_t = 3)]
    issues: usize,
    /// Values per issue
    #[arg(long, default_value_t = 4)]
    values: usize,
    /// Seed for profiles and window sampling
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    negotiator::log();
    let args = Args::parse();
    let mut rng = args
        .seed
        .map(SmallRng::seed_from_u64)
        .unwrap_or_else(SmallRng::from_os_rng);
    let ref domain = synthetic(args.issues, args.values);
    let ref ids = [PartyId::from("alice"), PartyId::from("bob")];
    let mut parties = Vec::with_capacity(ids.len());
    for id in ids.iter() {
        let profile = AdditiveProfile::random(id.name(), domain, &mut rng);
        let mut party = Party::default();
        party.notify(Inform::Settings(Settings {
            id: id.clone(),
            protocol: Protocol::Mopac,
            progress: Progress::new(1, args.rounds),
            profile: Profile::from(profile),
            parameters: parameters(rng.random()),
        }))?;
        parties.push(party);
    }
    log::info!("negotiating over {} for {} rounds", domain, args.rounds);
    let mut latest = BTreeMap::<PartyId, Bid>::new();
    let mut agreement = None;
    for turn in 0..2 * args.rounds as usize {
        if turn == args.rounds as usize {
            poll(&mut parties, &latest)?;
        }
        let mover = turn % ids.len();
        let Some(Outbound::Act(action)) = parties[mover].notify(Inform::YourTurn)? else {
            anyhow::bail!("{} did not act on its turn", ids[mover]);
        };
        match action {
            Action::Offer { ref actor, ref bid } => {
                println!("{:>4} {}", turn, action.to_string().cyan());
                latest.insert(actor.clone(), bid.clone());
            }
            Action::Accept { ref bid, .. } => {
                println!("{:>4} {}", turn, action.to_string().green());
                agreement = Some(bid.clone());
            }
            Action::EndNegotiation { .. } => println!("{:>4} {}", turn, action.to_string().red()),
        }
        for party in parties.iter_mut() {
            party.notify(Inform::ActionDone(action.clone()))?;
        }
        if !action.is_offer() {
            break;
        }
    }
    for party in parties.iter_mut() {
        party.notify(Inform::Finished)?;
    }
    match agreement {
        None => println!("{}", "no agreement".red()),
        Some(ref bid) => {
            println!("{} {}", "agreement".green().bold(), bid);
            for party in parties.iter() {
                if let (Some(me), Some(profile)) = (party.me(), party.profile()) {
                    println!("  {:<8} utility {}", me, profile.utility(bid));
                }
            }
        }
    }
    Ok(())
}

/// Issues `i0, i1, ...` each with values `a, b, c, ...`.
fn synthetic(issues: usize, values: usize) -> Domain {
    Domain::new(
        "synthetic",
        (0..issues)
            .map(|i| {
                let labels = (0..values)
                    .map(|v| Value::from(label(v).as_str()))
                    .collect::<Vec<_>>();
                (Issue::from(format!("i{}", i)), labels)
            })
            .collect(),
    )
}

fn label(v: usize) -> String {
    match char::from_u32('a' as u32 + v as u32) {
        Some(c) if v < 26 => c.to_string(),
        _ => format!("v{}", v),
    }
}

fn parameters(seed: u64) -> Parameters {
    serde_json::json!({ "seed": seed })
        .as_object()
        .cloned()
        .unwrap_or_default()
}

/// Every party votes on every party's latest offer, with equal powers.
fn poll(parties: &mut [Party], latest: &BTreeMap<PartyId, Bid>) -> anyhow::Result<()> {
    let candidates = latest
        .iter()
        .map(|(actor, bid)| Candidate::new(actor.clone(), Some(bid.clone())))
        .collect::<Vec<_>>();
    let powers = latest
        .keys()
        .map(|actor| (actor.clone(), 1))
        .collect::<PowerTable>();
    let ref ballot = Ballot::new(candidates, powers);
    for party in parties.iter_mut() {
        if let Some(Outbound::Votes(votes)) = party.notify(Inform::Voting(ballot.clone()))? {
            println!("     {}", votes.to_string().yellow());
        }
    }
    Ok(())
}
