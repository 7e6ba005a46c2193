use thiserror::Error;

/// The runtime's error taxonomy. Each kind maps 1:1 onto a managed exception
/// class when it surfaces inside interpreted code.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VmError {
	#[error("object reference not set to an instance of an object")]
	NullReference,
	#[error("index was outside the bounds of the array")]
	IndexOutOfRange,
	#[error("specified cast is not valid")]
	InvalidCast,
	#[error("arithmetic operation resulted in an overflow")]
	Overflow,
	#[error("attempted to divide by zero")]
	DivideByZero,
	#[error("overflow or underflow in the arithmetic operation")]
	Arithmetic,
	#[error("operation caused a stack overflow")]
	StackOverflow,
	#[error("insufficient memory to continue the execution of the program")]
	OutOfMemory,
	#[error("could not load type")]
	TypeLoad,
	#[error("attempted to access a missing field")]
	MissingField,
	#[error("attempted to access a missing method")]
	MissingMethod,
	#[error("format of the executable or library is invalid")]
	BadImageFormat,
	#[error("internal error in the runtime")]
	ExecutionEngine,
	#[error("value does not fall within the expected range")]
	Argument,
	#[error("specified argument was out of the range of valid values")]
	ArgumentOutOfRange,
	#[error("unable to find the specified file")]
	FileNotFound,
	#[error("the method or operation is not implemented")]
	NotImplemented,
	#[error("too many images loaded")]
	ExceedMaxImageCount,
	#[error("thread was being aborted")]
	ThreadAbort,
}

pub type VmResult<T> = Result<T, VmError>;

impl From<std::io::Error> for VmError {
	fn from(_: std::io::Error) -> Self {
		VmError::BadImageFormat
	}
}

impl VmError {
	/// The corlib exception type raised for this kind, as `(namespace, name)`.
	pub fn exception_type(&self) -> (&'static str, &'static str) {
		match self {
			VmError::NullReference => ("System", "NullReferenceException"),
			VmError::IndexOutOfRange => ("System", "IndexOutOfRangeException"),
			VmError::InvalidCast => ("System", "InvalidCastException"),
			VmError::Overflow => ("System", "OverflowException"),
			VmError::DivideByZero => ("System", "DivideByZeroException"),
			VmError::Arithmetic => ("System", "ArithmeticException"),
			VmError::StackOverflow => ("System", "StackOverflowException"),
			VmError::OutOfMemory => ("System", "OutOfMemoryException"),
			VmError::TypeLoad => ("System", "TypeLoadException"),
			VmError::MissingField => ("System", "MissingFieldException"),
			VmError::MissingMethod => ("System", "MissingMethodException"),
			VmError::BadImageFormat => ("System", "BadImageFormatException"),
			VmError::ExecutionEngine => ("System", "ExecutionEngineException"),
			VmError::Argument => ("System", "ArgumentException"),
			VmError::ArgumentOutOfRange => ("System", "ArgumentOutOfRangeException"),
			VmError::FileNotFound => ("System.IO", "FileNotFoundException"),
			VmError::NotImplemented => ("System", "NotImplementedException"),
			VmError::ExceedMaxImageCount => ("System", "OutOfMemoryException"),
			VmError::ThreadAbort => ("System.Threading", "ThreadAbortException"),
		}
	}
}
