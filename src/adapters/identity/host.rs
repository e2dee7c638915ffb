// Default IdentityResolver implementation backed by the host user/group database (Unix-only)

use super::IdentityResolver;
use crate::types::errors::{Error, ErrorKind, Result};

#[derive(Copy, Clone, Debug, Default)]
pub struct HostIdentityResolver;

impl IdentityResolver for HostIdentityResolver {
    fn user_name(&self, uid: u32) -> Result<String> {
        let user = uzers::get_user_by_uid(uid).ok_or_else(|| {
            Error::new(
                ErrorKind::IdentityLookup,
                format!("no account for uid {uid}"),
            )
        })?;
        user.name()
            .to_str()
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::IdentityLookup,
                    format!("non-utf8 account name for uid {uid}"),
                )
            })
    }

    fn group_name(&self, gid: u32) -> Result<String> {
        let group = uzers::get_group_by_gid(gid).ok_or_else(|| {
            Error::new(ErrorKind::IdentityLookup, format!("no group for gid {gid}"))
        })?;
        group
            .name()
            .to_str()
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::IdentityLookup,
                    format!("non-utf8 group name for gid {gid}"),
                )
            })
    }
}
