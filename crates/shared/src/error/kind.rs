//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every crate in the app.

use serde::Serialize;

/// エラー種別の列挙体
///
/// ローカルアプリ全体で使用するエラー分類を定義します。
/// HTTP の無いオンデバイス構成のため、ステータスコードではなく
/// 「ユーザーにどう見せるか / どうログするか」を軸に分類します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Unauthorized;
/// assert_eq!(kind.as_str(), "Unauthorized");
/// assert!(!kind.is_internal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力が不正（空のユーザー名、4桁でない PIN など）
    InvalidInput,
    /// 認証失敗（ユーザー名 / PIN の不一致）
    Unauthorized,
    /// 現在の状態と競合（ユーザー名の重複など）
    Conflict,
    /// リソースが見つからない
    NotFound,
    /// 前提条件を満たしていない（生体認証の事前条件など）
    PreconditionFailed,
    /// 端末ストレージの読み書き失敗
    Storage,
    /// アプリ内部エラー
    Internal,
}

impl ErrorKind {
    /// ユーザー向けの文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Conflict.as_str(), "Conflict");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::PreconditionFailed => "Precondition Failed",
            ErrorKind::Storage => "Storage",
            ErrorKind::Internal => "Internal",
        }
    }

    /// アプリ側の不具合かどうかを判定
    ///
    /// `true` のエラーは `tracing::error!` でログに記録すべきです。
    /// ユーザー操作起因のエラー（認証失敗など）は `false` を返します。
    #[inline]
    pub const fn is_internal(&self) -> bool {
        matches!(self, ErrorKind::Storage | ErrorKind::Internal)
    }

    /// ユーザーの再入力で回復できるエラーかどうかを判定
    #[inline]
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidInput
                | ErrorKind::Unauthorized
                | ErrorKind::Conflict
                | ErrorKind::PreconditionFailed
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
